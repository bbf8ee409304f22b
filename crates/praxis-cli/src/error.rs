//! Error types for praxis-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from praxis-core
    #[error(transparent)]
    Core(#[from] praxis_core::Error),

    /// Error from praxis-extensions
    #[error(transparent)]
    Extensions(#[from] praxis_extensions::Error),

    /// Error from praxis-fs
    #[error(transparent)]
    Fs(#[from] praxis_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// The command ran but its outcome should fail the process
    #[error("{message}")]
    Failed { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

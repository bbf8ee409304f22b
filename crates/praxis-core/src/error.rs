//! Error types for praxis-core

use std::path::PathBuf;

/// Result type for praxis-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in praxis-core operations
///
/// Opinion resolution and audit registration never fail on content
/// problems; those become warnings on their results. These errors cover
/// explicit lookups only.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown domain '{value}' (expected one of: {expected})")]
    UnknownDomain { value: String, expected: String },

    #[error("Unknown stage '{value}' (expected one of: {expected})")]
    UnknownStage { value: String, expected: String },

    #[error("Project configuration not found at {path}")]
    ProjectConfigNotFound { path: PathBuf },

    /// Filesystem error from praxis-fs
    #[error(transparent)]
    Fs(#[from] praxis_fs::Error),

    /// Extension error from praxis-extensions
    #[error(transparent)]
    Extensions(#[from] praxis_extensions::Error),
}

use std::path::PathBuf;

/// Errors that make a whole extension unusable.
///
/// Problems with a single contribution inside an otherwise valid
/// manifest are not errors; they surface as warnings on
/// [`LoadedManifest`](crate::LoadedManifest).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The installed extension has no directory on disk.
    #[error("extension '{name}' is installed but its directory {path} does not exist")]
    ExtensionDirMissing { name: String, path: PathBuf },

    /// Extension manifest file not found at the expected path.
    #[error("extension '{name}' has no manifest at {path}")]
    ManifestNotFound { name: String, path: PathBuf },

    /// Manifest exists but could not be read.
    #[error("extension '{name}': failed to read manifest: {source}")]
    ManifestRead {
        name: String,
        #[source]
        source: praxis_fs::Error,
    },

    /// Manifest is not valid YAML.
    #[error("extension '{name}': failed to parse manifest: {message}")]
    ManifestParse { name: String, message: String },

    /// Manifest parsed but is not a mapping.
    #[error("extension '{name}': manifest must be a mapping")]
    ManifestShape { name: String },

    #[error("extension '{name}': manifest is missing 'manifest_version'")]
    MissingManifestVersion { name: String },

    #[error(
        "extension '{name}': unsupported manifest_version '{version}' (supported: {supported})"
    )]
    UnsupportedManifestVersion {
        name: String,
        version: String,
        supported: String,
    },

    #[error("extension '{name}': manifest is missing 'name'")]
    MissingName { name: String },

    /// The name collides with the provenance tag of built-in documents.
    #[error("extension name '{name}' is reserved")]
    ReservedName { name: String },

    /// Declared name differs from the directory name.
    #[error("extension '{expected}': manifest declares name '{found}'")]
    NameMismatch { expected: String, found: String },

    /// Workspace configuration could not be loaded.
    #[error(transparent)]
    Fs(#[from] praxis_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Constants and enums for well-known Praxis filesystem paths.

use std::path::Path;

/// Well-known directory and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PraxisPath {
    /// The core policy tree (`opinions/`)
    OpinionsDir,
    /// Domain-independent opinions (`_shared/`)
    SharedDir,
    /// Template directories excluded from every walk (`_templates/`)
    TemplatesDir,
    /// Installed extensions root below the workspace (`extensions/`)
    ExtensionsDir,
    /// Extension manifest file name (`praxis-extension.yaml`)
    ExtensionManifest,
    /// Workspace configuration file (`workspace-config.yaml`)
    WorkspaceConfig,
    /// Project configuration file (`praxis.yaml`)
    ProjectConfig,
}

impl PraxisPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpinionsDir => "opinions",
            Self::SharedDir => "_shared",
            Self::TemplatesDir => "_templates",
            Self::ExtensionsDir => "extensions",
            Self::ExtensionManifest => "praxis-extension.yaml",
            Self::WorkspaceConfig => "workspace-config.yaml",
            Self::ProjectConfig => "praxis.yaml",
        }
    }
}

impl AsRef<Path> for PraxisPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for PraxisPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PraxisPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

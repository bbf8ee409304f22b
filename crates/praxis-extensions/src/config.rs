//! Workspace context: where the workspace lives and which extensions are installed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use praxis_fs::{ConfigStore, PraxisPath};

/// On-disk shape of `workspace-config.yaml`.
///
/// Only `installed_extensions` is interpreted here; everything else is
/// kept so callers that own those keys can still read them.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub installed_extensions: Vec<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

/// Explicit workspace state handed to the merge and resolve entry points.
///
/// Constructed by the caller (usually from `PRAXIS_HOME`); library code
/// never consults the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    root: PathBuf,
    installed_extensions: Vec<String>,
}

impl WorkspaceContext {
    /// Build a context from explicit values.
    ///
    /// Duplicate extension names are collapsed, keeping the first.
    pub fn new(root: impl Into<PathBuf>, installed_extensions: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(installed_extensions.len());
        for name in installed_extensions {
            if deduped.contains(&name) {
                tracing::debug!("Ignoring duplicate installed extension '{}'", name);
                continue;
            }
            deduped.push(name);
        }
        Self {
            root: root.into(),
            installed_extensions: deduped,
        }
    }

    /// Load the context for a workspace root.
    ///
    /// A missing `workspace-config.yaml` means no extensions are installed.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(PraxisPath::WorkspaceConfig.as_str());
        let config = if config_path.is_file() {
            ConfigStore::new().load::<WorkspaceConfig>(&config_path)?
        } else {
            tracing::debug!("No workspace config at {:?}", config_path);
            WorkspaceConfig::default()
        };
        Ok(Self::new(root, config.installed_extensions))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn installed_extensions(&self) -> &[String] {
        &self.installed_extensions
    }

    pub fn extensions_dir(&self) -> PathBuf {
        self.root.join(PraxisPath::ExtensionsDir.as_str())
    }

    pub fn extension_dir(&self, name: &str) -> PathBuf {
        self.extensions_dir().join(name)
    }
}

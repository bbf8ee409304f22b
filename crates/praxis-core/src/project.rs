//! Project configuration (`praxis.yaml`)
//!
//! Only the fields the opinion and audit engines need are read here.
//! Validation of the rest of the file belongs to its owner.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Domain, ProjectContext, Stage};
use crate::error::{Error, Result};
use praxis_fs::{ConfigStore, PraxisPath};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub domain: Domain,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub privacy_level: Option<String>,
}

impl ProjectConfig {
    /// Load `praxis.yaml` from a project directory.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(PraxisPath::ProjectConfig.as_str());
        if !path.is_file() {
            return Err(Error::ProjectConfigNotFound { path });
        }
        Ok(ConfigStore::new().load(&path)?)
    }

    pub fn context(&self) -> ProjectContext {
        ProjectContext {
            domain: self.domain,
            stage: self.stage,
            subtype: self
                .subtype
                .clone()
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

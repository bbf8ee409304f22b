//! Runnable audit checks

use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Stage;
use crate::opinions::subtype_segments;

/// How a failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Warning,
    Failed,
}

impl Severity {
    /// Map a manifest-declared severity.
    ///
    /// Absent means `Warning`; unrecognised values are treated as `Failed`.
    pub fn from_declared(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            None => Self::Warning,
            Some(s) if s == "warning" => Self::Warning,
            Some(s) if s == "failed" || s == "error" => Self::Failed,
            Some(other) => {
                tracing::debug!("Unknown severity '{}' treated as failed", other);
                Self::Failed
            }
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// The predicate a check applies to a project directory.
#[derive(Debug, Clone)]
pub enum CheckKind {
    FileExists { path: String },
    DirExists { path: String },
    FileContains { path: String, pattern: Regex },
}

impl CheckKind {
    pub fn path(&self) -> &str {
        match self {
            Self::FileExists { path } | Self::DirExists { path } | Self::FileContains { path, .. } => {
                path
            }
        }
    }

    /// Evaluate against `project_root`. Unreadable files fail the check.
    pub fn evaluate(&self, project_root: &Path) -> bool {
        let target = project_root.join(self.path());
        match self {
            Self::FileExists { .. } => target.is_file(),
            Self::DirExists { .. } => target.is_dir(),
            Self::FileContains { pattern, .. } => match praxis_fs::io::read_text(&target) {
                Ok(content) => pattern.is_match(&content),
                Err(e) => {
                    tracing::debug!("file_contains check could not read {:?}: {}", target, e);
                    false
                }
            },
        }
    }
}

/// A registered check, ready to run.
#[derive(Debug, Clone)]
pub struct AuditCheck {
    /// Unique within a domain; extension checks are `extension:check`.
    pub name: String,
    pub category: String,
    pub kind: CheckKind,
    pub pass_message: String,
    pub fail_message: String,
    pub severity: Severity,
    pub min_stage: Option<Stage>,
    /// Subtypes the check is limited to; empty means all.
    pub subtypes: Vec<String>,
    /// `"core"` or the contributing extension.
    pub source: String,
}

impl AuditCheck {
    /// Whether the check runs for a project at `stage` with `subtype`.
    ///
    /// Stage-gated checks are skipped when the project has no stage. A
    /// subtype filter entry matches the project subtype or any of its
    /// dash-separated prefixes (`cli` matches `cli-python`).
    pub fn applies_to(&self, stage: Option<Stage>, subtype: Option<&str>) -> bool {
        if let Some(min) = self.min_stage {
            match stage {
                Some(current) if current >= min => {}
                _ => return false,
            }
        }
        if self.subtypes.is_empty() {
            return true;
        }
        let Some(subtype) = subtype else {
            return false;
        };
        let project = subtype_segments(subtype);
        self.subtypes.iter().any(|wanted| {
            let wanted = subtype_segments(wanted);
            !wanted.is_empty() && project.starts_with(&wanted)
        })
    }
}

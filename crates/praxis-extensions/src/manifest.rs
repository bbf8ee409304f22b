//! Extension manifest schema for `praxis-extension.yaml` files.
//!
//! A manifest declares which opinion documents and audit checks an
//! extension contributes to a workspace.
//!
//! # Example YAML
//!
//! ```yaml
//! manifest_version: "0.1"
//! name: mobile-pack
//! description: Opinions for mobile apps
//! contributions:
//!   opinions:
//!     - source: opinions/mobile/principles.md
//!       target: code/subtypes/mobile/principles.md
//!   audits:
//!     - domain: code
//!       subtypes: [mobile]
//!       checks:
//!         - name: has_manifest
//!           category: structure
//!           check_type: file_exists
//!           path: app.json
//!           pass_message: app.json present
//!           fail_message: app.json missing
//!           severity: warning
//!           min_stage: formalize
//! ```

use serde::{Deserialize, Serialize};

/// A validated extension manifest.
///
/// Only contributions that passed their own validation are present;
/// the rest were dropped by the loader with a warning.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionManifest {
    pub manifest_version: String,
    /// Extension name; always equal to the extension's directory name.
    pub name: String,
    pub description: Option<String>,
    pub contributions: Contributions,
}

/// Everything an extension contributes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Contributions {
    pub opinions: Vec<OpinionContribution>,
    pub audits: Vec<AuditContribution>,
}

/// An opinion document shipped by an extension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OpinionContribution {
    /// Path of the document inside the extension directory.
    pub source: String,
    /// Path the document occupies in the merged opinion tree.
    pub target: String,
}

/// A group of audit checks for one domain.
#[derive(Debug, Clone, Serialize)]
pub struct AuditContribution {
    pub domain: String,
    /// Subtypes the checks apply to; empty means all subtypes.
    pub subtypes: Vec<String>,
    pub checks: Vec<AuditCheckContribution>,
}

/// The kinds of predicate an audit check can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    FileExists,
    DirExists,
    FileContains,
}

impl CheckType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "file_exists" => Some(Self::FileExists),
            "dir_exists" => Some(Self::DirExists),
            "file_contains" => Some(Self::FileContains),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileExists => "file_exists",
            Self::DirExists => "dir_exists",
            Self::FileContains => "file_contains",
        }
    }
}

impl std::fmt::Display for CheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single audit check as declared in a manifest.
///
/// `check_type`, `severity` and `min_stage` stay as declared here; turning
/// them into runnable checks is the audit registry's job, which reports
/// unknown values there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuditCheckContribution {
    pub name: String,
    pub category: String,
    pub check_type: String,
    pub path: String,
    #[serde(default)]
    pub pattern: Option<String>,
    pub pass_message: String,
    pub fail_message: String,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub min_stage: Option<String>,
}

impl AuditCheckContribution {
    /// Parsed check type, or `None` if the manifest named an unknown one.
    pub fn kind(&self) -> Option<CheckType> {
        CheckType::parse(&self.check_type)
    }

    /// Field-level validation; the error string says what is wrong.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("check name must not be empty".to_string());
        }
        if self.name.contains(':') {
            return Err(format!("check name '{}' must not contain ':'", self.name));
        }
        if self.path.trim().is_empty() {
            return Err(format!("check '{}' has an empty path", self.name));
        }
        praxis_fs::validate_relative_path(&self.path)
            .map_err(|e| format!("check '{}': {}", self.name, e))?;

        let wants_pattern = self.kind() == Some(CheckType::FileContains);
        match (&self.pattern, wants_pattern) {
            (None, true) => Err(format!(
                "check '{}' is file_contains but declares no pattern",
                self.name
            )),
            (Some(_), false) if self.kind().is_some() => Err(format!(
                "check '{}' declares a pattern but is {}",
                self.name, self.check_type
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn check(check_type: &str, pattern: Option<&str>) -> AuditCheckContribution {
        AuditCheckContribution {
            name: "has_readme".to_string(),
            category: "docs".to_string(),
            check_type: check_type.to_string(),
            path: "README.md".to_string(),
            pattern: pattern.map(str::to_string),
            pass_message: "ok".to_string(),
            fail_message: "missing".to_string(),
            severity: None,
            min_stage: None,
        }
    }

    #[test]
    fn test_parse_check_from_yaml() {
        let yaml = r#"
name: has_readme
category: docs
check_type: file_contains
path: README.md
pattern: "^# "
pass_message: README has a title
fail_message: README lacks a title
severity: failed
"#;
        let parsed: AuditCheckContribution = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.kind(), Some(CheckType::FileContains));
        assert_eq!(parsed.severity.as_deref(), Some("failed"));
        assert!(parsed.min_stage.is_none());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let yaml = "name: x\ncategory: y\ncheck_type: file_exists\n";
        assert!(serde_yaml::from_str::<AuditCheckContribution>(yaml).is_err());
    }

    #[test]
    fn test_file_contains_requires_pattern() {
        assert!(check("file_contains", None).validate().is_err());
        assert!(check("file_contains", Some("x")).validate().is_ok());
    }

    #[test]
    fn test_pattern_only_allowed_for_file_contains() {
        assert!(check("file_exists", Some("x")).validate().is_err());
        assert!(check("dir_exists", None).validate().is_ok());
    }

    #[test]
    fn test_unknown_check_type_passes_field_validation() {
        // Reported later by the audit registry.
        let c = check("url_reachable", None);
        assert!(c.kind().is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_path_escape_rejected() {
        let mut c = check("file_exists", None);
        c.path = "../outside.md".to_string();
        assert!(c.validate().is_err());
    }

    #[rstest]
    #[case("file_exists", Some(CheckType::FileExists))]
    #[case("dir_exists", Some(CheckType::DirExists))]
    #[case("file_contains", Some(CheckType::FileContains))]
    #[case("FileExists", None)]
    #[case("", None)]
    fn test_check_type_names(#[case] raw: &str, #[case] expected: Option<CheckType>) {
        assert_eq!(CheckType::parse(raw), expected);
        if let Some(kind) = expected {
            assert_eq!(kind.as_str(), raw);
        }
    }
}

//! Manifest loading with per-contribution isolation.
//!
//! [`load_manifest`] either rejects an extension outright (returning an
//! [`Error`]) or accepts it with zero or more warnings describing the
//! individual contributions it had to drop. Nothing in here panics on bad
//! input.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::config::WorkspaceContext;
use crate::error::{Error, Result};
use crate::manifest::{
    AuditCheckContribution, AuditContribution, Contributions, ExtensionManifest,
    OpinionContribution,
};
use crate::SUPPORTED_MANIFEST_VERSIONS;
use praxis_fs::{PraxisPath, io, validate_relative_path};

/// A manifest that passed validation, with the warnings collected on the way.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: ExtensionManifest,
    /// The extension directory; contribution sources resolve against it.
    pub root: PathBuf,
    pub warnings: Vec<String>,
}

impl LoadedManifest {
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Absolute path of a contribution source.
    pub fn source_path(&self, contribution: &OpinionContribution) -> PathBuf {
        praxis_fs::NormalizedPath::new(&contribution.source).under(&self.root)
    }
}

/// An installed extension that could not be used at all.
#[derive(Debug)]
pub struct FailedExtension {
    pub name: String,
    pub error: Error,
}

/// The result of loading every installed extension once.
#[derive(Debug, Default)]
pub struct InstalledExtensions {
    /// Successfully loaded manifests, in installation order.
    pub loaded: Vec<LoadedManifest>,
    pub failed: Vec<FailedExtension>,
    /// One warning per failed extension plus every contribution warning,
    /// in installation order.
    pub warnings: Vec<String>,
}

/// Load every extension listed in the workspace, isolating failures.
pub fn load_installed(ctx: &WorkspaceContext) -> InstalledExtensions {
    let mut out = InstalledExtensions::default();
    for name in ctx.installed_extensions() {
        match load_manifest(&ctx.extension_dir(name), name) {
            Ok(loaded) => {
                out.warnings.extend(loaded.warnings.iter().cloned());
                out.loaded.push(loaded);
            }
            Err(error) => {
                tracing::warn!("{}", error);
                out.warnings.push(error.to_string());
                out.failed.push(FailedExtension {
                    name: name.clone(),
                    error,
                });
            }
        }
    }
    out
}

/// Load and validate one extension's manifest.
///
/// `expected_name` is the name the extension is installed under, which
/// the manifest's `name` must match.
pub fn load_manifest(extension_dir: &Path, expected_name: &str) -> Result<LoadedManifest> {
    let name = expected_name.to_string();
    if RESERVED_NAMES.contains(&expected_name) {
        return Err(Error::ReservedName { name });
    }
    if !extension_dir.is_dir() {
        return Err(Error::ExtensionDirMissing {
            name,
            path: extension_dir.to_path_buf(),
        });
    }

    let manifest_path = extension_dir.join(PraxisPath::ExtensionManifest.as_str());
    if !manifest_path.is_file() {
        return Err(Error::ManifestNotFound {
            name,
            path: manifest_path,
        });
    }

    let content = io::read_text(&manifest_path).map_err(|source| Error::ManifestRead {
        name: name.clone(),
        source,
    })?;
    let value: Value = serde_yaml::from_str(&content).map_err(|e| Error::ManifestParse {
        name: name.clone(),
        message: e.to_string(),
    })?;
    let Value::Mapping(map) = value else {
        return Err(Error::ManifestShape { name });
    };

    let manifest_version = match map.get("manifest_version").and_then(scalar_string) {
        Some(v) => v,
        None => return Err(Error::MissingManifestVersion { name }),
    };
    if !SUPPORTED_MANIFEST_VERSIONS.contains(&manifest_version.as_str()) {
        return Err(Error::UnsupportedManifestVersion {
            name,
            version: manifest_version,
            supported: SUPPORTED_MANIFEST_VERSIONS.join(", "),
        });
    }

    let declared_name = match map.get("name").and_then(Value::as_str) {
        Some(n) => n.to_string(),
        None => return Err(Error::MissingName { name }),
    };
    if declared_name != expected_name {
        return Err(Error::NameMismatch {
            expected: name,
            found: declared_name,
        });
    }

    let description = map
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut parser = ContributionParser {
        name: &name,
        root: extension_dir,
        warnings: Vec::new(),
    };
    let contributions = parser.parse(map.get("contributions"));
    let warnings = parser.warnings;

    tracing::debug!(
        "Loaded extension '{}': {} opinion(s), {} audit group(s), {} warning(s)",
        name,
        contributions.opinions.len(),
        contributions.audits.len(),
        warnings.len()
    );

    Ok(LoadedManifest {
        manifest: ExtensionManifest {
            manifest_version,
            name,
            description,
            contributions,
        },
        root: extension_dir.to_path_buf(),
        warnings,
    })
}

/// Names extensions may not use; `core` tags built-in opinions.
const RESERVED_NAMES: &[&str] = &["core"];

/// Accept strings and numbers (`0.1` and `"0.1"` are the same version).
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

struct ContributionParser<'a> {
    name: &'a str,
    root: &'a Path,
    warnings: Vec<String>,
}

impl ContributionParser<'_> {
    fn warn(&mut self, message: String) {
        let message = format!("extension '{}': {}", self.name, message);
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }

    fn parse(&mut self, value: Option<&Value>) -> Contributions {
        let map = match value {
            None | Some(Value::Null) => return Contributions::default(),
            Some(Value::Mapping(map)) => map,
            Some(_) => {
                self.warn("'contributions' is not a mapping; ignoring it".to_string());
                return Contributions::default();
            }
        };

        let opinions = self
            .entries(map, "opinions")
            .into_iter()
            .filter_map(|(idx, entry)| self.opinion(idx, entry))
            .collect();
        let audits = self
            .entries(map, "audits")
            .into_iter()
            .filter_map(|(idx, entry)| self.audit(idx, entry))
            .collect();

        Contributions { opinions, audits }
    }

    /// The mapping entries of `contributions.<key>`, warning on the rest.
    fn entries(&mut self, map: &Mapping, key: &str) -> Vec<(usize, Mapping)> {
        let list = match map.get(key) {
            None | Some(Value::Null) => return Vec::new(),
            Some(Value::Sequence(list)) => list,
            Some(_) => {
                self.warn(format!("contributions.{key} is not a list; ignoring it"));
                return Vec::new();
            }
        };
        let mut out = Vec::new();
        for (idx, entry) in list.iter().enumerate() {
            match entry {
                Value::Mapping(m) => out.push((idx, m.clone())),
                _ => self.warn(format!("contributions.{key}[{idx}] is not a mapping; skipped")),
            }
        }
        out
    }

    fn opinion(&mut self, idx: usize, entry: Mapping) -> Option<OpinionContribution> {
        let contribution: OpinionContribution =
            match serde_yaml::from_value(Value::Mapping(entry)) {
                Ok(c) => c,
                Err(e) => {
                    self.warn(format!("contributions.opinions[{idx}] is invalid: {e}; skipped"));
                    return None;
                }
            };

        let source = match validate_relative_path(&contribution.source) {
            Ok(p) => p,
            Err(e) => {
                self.warn(format!("opinion source rejected: {e}; skipped"));
                return None;
            }
        };
        match validate_relative_path(&contribution.target) {
            Ok(target) if target.extension() == Some("md") => {}
            Ok(_) => {
                self.warn(format!(
                    "opinion target '{}' is not a markdown file; skipped",
                    contribution.target
                ));
                return None;
            }
            Err(e) => {
                self.warn(format!("opinion target rejected: {e}; skipped"));
                return None;
            }
        }

        if !source.under(self.root).is_file() {
            self.warn(format!(
                "opinion source '{}' does not exist; skipped",
                contribution.source
            ));
            return None;
        }
        Some(contribution)
    }

    fn audit(&mut self, idx: usize, entry: Mapping) -> Option<AuditContribution> {
        let Some(domain) = entry.get("domain").and_then(Value::as_str).map(str::to_string) else {
            self.warn(format!("contributions.audits[{idx}] has no 'domain'; skipped"));
            return None;
        };

        let subtypes = match entry.get("subtypes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(list)) => {
                let parsed: Option<Vec<String>> =
                    list.iter().map(|v| v.as_str().map(str::to_string)).collect();
                match parsed {
                    Some(s) => s,
                    None => {
                        self.warn(format!(
                            "contributions.audits[{idx}].subtypes must be a list of strings; skipped"
                        ));
                        return None;
                    }
                }
            }
            Some(_) => {
                self.warn(format!(
                    "contributions.audits[{idx}].subtypes is not a list; skipped"
                ));
                return None;
            }
        };

        let raw_checks = match entry.get("checks") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(list)) => list.clone(),
            Some(_) => {
                self.warn(format!(
                    "contributions.audits[{idx}].checks is not a list; skipped"
                ));
                return None;
            }
        };

        let mut seen = HashSet::new();
        let mut checks = Vec::new();
        for (check_idx, raw) in raw_checks.into_iter().enumerate() {
            let location = format!("contributions.audits[{idx}].checks[{check_idx}]");
            if !raw.is_mapping() {
                self.warn(format!("{location} is not a mapping; skipped"));
                continue;
            }
            let check: AuditCheckContribution = match serde_yaml::from_value(raw) {
                Ok(c) => c,
                Err(e) => {
                    self.warn(format!("{location} is invalid: {e}; skipped"));
                    continue;
                }
            };
            if let Err(reason) = check.validate() {
                self.warn(format!("{location}: {reason}; skipped"));
                continue;
            }
            if !seen.insert(check.name.clone()) {
                self.warn(format!(
                    "{location}: duplicate check name '{}'; skipped",
                    check.name
                ));
                continue;
            }
            checks.push(check);
        }

        Some(AuditContribution {
            domain,
            subtypes,
            checks,
        })
    }
}

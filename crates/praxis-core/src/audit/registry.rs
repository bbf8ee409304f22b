//! Audit check registry: built-in checks plus extension contributions.
//!
//! Extension checks are registered under `"{extension}:{check}"`, so they
//! never collide with core checks or with each other across extensions.
//! Every problem with a single contribution is recorded as a warning and
//! only that contribution is dropped.

use std::collections::BTreeMap;

use regex::Regex;

use praxis_extensions::{
    AuditCheckContribution, AuditContribution, CheckType, InstalledExtensions, LoadedManifest,
};

use super::builtins::builtin_checks;
use super::check::{AuditCheck, CheckKind, Severity};
use crate::domain::{Domain, Stage};

/// Per-domain table of runnable checks.
#[derive(Debug, Clone, Default)]
pub struct AuditCheckRegistry {
    checks: BTreeMap<Domain, Vec<AuditCheck>>,
    warnings: Vec<String>,
}

impl AuditCheckRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in checks for every domain.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for domain in Domain::ALL {
            for check in builtin_checks(domain) {
                registry.register(domain, check);
            }
        }
        registry
    }

    /// Built-ins plus every loaded extension, in extension-name order.
    pub fn from_installed(installed: &InstalledExtensions) -> Self {
        let mut registry = Self::with_builtins();
        let mut ordered: Vec<&LoadedManifest> = installed.loaded.iter().collect();
        ordered.sort_by(|a, b| a.name().cmp(b.name()));
        for extension in ordered {
            registry.register_extension(extension);
        }
        registry
    }

    /// Add one check. Returns `false` (and records a warning) when the
    /// name is already taken in that domain.
    pub fn register(&mut self, domain: Domain, check: AuditCheck) -> bool {
        let entry = self.checks.entry(domain).or_default();
        if entry.iter().any(|c| c.name == check.name) {
            let message = format!(
                "audit check '{}' is already registered for domain '{}'; skipped",
                check.name, domain
            );
            tracing::warn!("{}", message);
            self.warnings.push(message);
            return false;
        }
        entry.push(check);
        true
    }

    /// Convert and register every audit contribution of one extension.
    pub fn register_extension(&mut self, extension: &LoadedManifest) {
        let name = extension.name();
        for contribution in &extension.manifest.contributions.audits {
            let domain = match contribution.domain.parse::<Domain>() {
                Ok(d) => d,
                Err(_) => {
                    self.warn(format!(
                        "extension '{}': audit contribution targets unknown domain '{}'; skipped",
                        name, contribution.domain
                    ));
                    continue;
                }
            };
            for check in &contribution.checks {
                match build_check(name, contribution, check) {
                    Ok(built) => {
                        tracing::debug!("Registered audit check '{}' for {}", built.name, domain);
                        self.register(domain, built);
                    }
                    Err(reason) => self.warn(format!(
                        "extension '{}': audit check '{}' skipped: {}",
                        name, check.name, reason
                    )),
                }
            }
        }
    }

    /// Checks registered for `domain`, in registration order.
    pub fn checks_for(&self, domain: Domain) -> &[AuditCheck] {
        self.checks.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, domain: Domain, name: &str) -> Option<&AuditCheck> {
        self.checks_for(domain).iter().find(|c| c.name == name)
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.checks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

fn build_check(
    extension: &str,
    contribution: &AuditContribution,
    check: &AuditCheckContribution,
) -> Result<AuditCheck, String> {
    let path = check.path.clone();
    let kind = match check.kind() {
        Some(CheckType::FileExists) => CheckKind::FileExists { path },
        Some(CheckType::DirExists) => CheckKind::DirExists { path },
        Some(CheckType::FileContains) => {
            let raw = check
                .pattern
                .as_deref()
                .ok_or_else(|| "file_contains check has no pattern".to_string())?;
            let pattern = Regex::new(raw).map_err(|e| format!("invalid pattern: {e}"))?;
            CheckKind::FileContains { path, pattern }
        }
        None => return Err(format!("unsupported check_type '{}'", check.check_type)),
    };

    let min_stage = match check.min_stage.as_deref() {
        None => None,
        Some(raw) => Some(
            raw.parse::<Stage>()
                .map_err(|_| format!("unknown min_stage '{raw}'"))?,
        ),
    };

    Ok(AuditCheck {
        name: format!("{}:{}", extension, check.name),
        category: check.category.clone(),
        kind,
        pass_message: check.pass_message.clone(),
        fail_message: check.fail_message.clone(),
        severity: Severity::from_declared(check.severity.as_deref()),
        min_stage,
        subtypes: contribution.subtypes.clone(),
        source: extension.to_string(),
    })
}

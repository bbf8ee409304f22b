//! Running the registered checks against a project directory.

use std::path::Path;

use serde::Serialize;

use super::check::Severity;
use super::registry::AuditCheckRegistry;
use crate::domain::{Domain, ProjectContext, Stage};

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Passed,
    Warning,
    Failed,
}

impl From<Severity> for CheckOutcome {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Self::Warning,
            Severity::Failed => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub name: String,
    pub category: String,
    pub status: CheckOutcome,
    pub message: String,
    pub source: String,
}

/// Results of an audit plus the registry warnings collected on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub domain: Domain,
    pub stage: Option<Stage>,
    pub subtype: Option<String>,
    pub results: Vec<AuditResult>,
    pub warnings: Vec<String>,
}

impl AuditReport {
    pub fn count(&self, status: CheckOutcome) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(CheckOutcome::Failed) > 0
    }
}

/// Evaluate every applicable check for `ctx` against `project_root`.
pub fn run_audit(
    registry: &AuditCheckRegistry,
    ctx: &ProjectContext,
    project_root: &Path,
) -> AuditReport {
    let subtype = ctx.subtype.as_deref();
    let results = registry
        .checks_for(ctx.domain)
        .iter()
        .filter(|check| check.applies_to(ctx.stage, subtype))
        .map(|check| {
            let passed = check.kind.evaluate(project_root);
            let (status, message) = if passed {
                (CheckOutcome::Passed, check.pass_message.clone())
            } else {
                (CheckOutcome::from(check.severity), check.fail_message.clone())
            };
            AuditResult {
                name: check.name.clone(),
                category: check.category.clone(),
                status,
                message,
                source: check.source.clone(),
            }
        })
        .collect();

    AuditReport {
        domain: ctx.domain,
        stage: ctx.stage,
        subtype: ctx.subtype.clone(),
        results,
        warnings: registry.warnings().to_vec(),
    }
}

//! Built-in audit checks, one table per domain.

use crate::domain::{Domain, Stage};
use crate::opinions::CORE_SOURCE;

use super::check::{AuditCheck, CheckKind, Severity};

struct Builtin {
    name: &'static str,
    category: &'static str,
    kind: fn() -> CheckKind,
    pass: &'static str,
    fail: &'static str,
    severity: Severity,
    min_stage: Option<Stage>,
}

fn file(path: &str) -> CheckKind {
    CheckKind::FileExists {
        path: path.to_string(),
    }
}

fn dir(path: &str) -> CheckKind {
    CheckKind::DirExists {
        path: path.to_string(),
    }
}

const PROJECT_FILE: Builtin = Builtin {
    name: "praxis_yaml_exists",
    category: "structure",
    kind: || file("praxis.yaml"),
    pass: "praxis.yaml present",
    fail: "praxis.yaml missing",
    severity: Severity::Failed,
    min_stage: None,
};

const README: Builtin = Builtin {
    name: "readme_exists",
    category: "documentation",
    kind: || file("README.md"),
    pass: "README.md present",
    fail: "README.md missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Formalize),
};

const CAPTURE: Builtin = Builtin {
    name: "capture_exists",
    category: "lifecycle",
    kind: || file("docs/capture.md"),
    pass: "docs/capture.md present",
    fail: "docs/capture.md missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Sense),
};

const SOD: Builtin = Builtin {
    name: "sod_exists",
    category: "lifecycle",
    kind: || file("docs/sod.md"),
    pass: "Solution overview (docs/sod.md) present",
    fail: "Solution overview (docs/sod.md) missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Commit),
};

const CODE_TESTS: Builtin = Builtin {
    name: "tests_dir_exists",
    category: "testing",
    kind: || dir("tests"),
    pass: "tests/ directory present",
    fail: "tests/ directory missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Execute),
};

const CODE_GITIGNORE: Builtin = Builtin {
    name: "gitignore_exists",
    category: "structure",
    kind: || file(".gitignore"),
    pass: ".gitignore present",
    fail: ".gitignore missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Execute),
};

const WRITE_DRAFTS: Builtin = Builtin {
    name: "drafts_dir_exists",
    category: "structure",
    kind: || dir("drafts"),
    pass: "drafts/ directory present",
    fail: "drafts/ directory missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Execute),
};

const LEARN_NOTES: Builtin = Builtin {
    name: "notes_dir_exists",
    category: "structure",
    kind: || dir("notes"),
    pass: "notes/ directory present",
    fail: "notes/ directory missing",
    severity: Severity::Warning,
    min_stage: Some(Stage::Execute),
};

const CODE_CHECKS: &[Builtin] = &[PROJECT_FILE, README, CAPTURE, SOD, CODE_TESTS, CODE_GITIGNORE];
const WRITE_CHECKS: &[Builtin] = &[PROJECT_FILE, README, CAPTURE, SOD, WRITE_DRAFTS];
const LEARN_CHECKS: &[Builtin] = &[PROJECT_FILE, README, CAPTURE, LEARN_NOTES];
const COMMON_CHECKS: &[Builtin] = &[PROJECT_FILE, README, CAPTURE];

fn builtins_for(domain: Domain) -> &'static [Builtin] {
    match domain {
        Domain::Code => CODE_CHECKS,
        Domain::Write => WRITE_CHECKS,
        Domain::Learn => LEARN_CHECKS,
        Domain::Create | Domain::Observe => COMMON_CHECKS,
    }
}

/// The core checks for `domain`.
pub fn builtin_checks(domain: Domain) -> Vec<AuditCheck> {
    builtins_for(domain)
        .iter()
        .map(|builtin| AuditCheck {
            name: builtin.name.to_string(),
            category: builtin.category.to_string(),
            kind: (builtin.kind)(),
            pass_message: builtin.pass.to_string(),
            fail_message: builtin.fail.to_string(),
            severity: builtin.severity,
            min_stage: builtin.min_stage,
            subtypes: Vec::new(),
            source: CORE_SOURCE.to_string(),
        })
        .collect()
}

//! Audit checks
//!
//! The registry holds one table of checks per domain: the built-ins from
//! [`builtins`] plus whatever installed extensions contribute. The runner
//! evaluates the applicable subset against a project directory.

pub mod builtins;
pub mod check;
pub mod registry;
pub mod runner;

pub use check::{AuditCheck, CheckKind, Severity};
pub use registry::AuditCheckRegistry;
pub use runner::{AuditReport, AuditResult, CheckOutcome, run_audit};

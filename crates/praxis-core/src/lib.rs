//! Core layer for Praxis
//!
//! This crate implements:
//!
//! - **Opinion resolution**: merging the core opinion tree with extension
//!   contributions and selecting the documents that apply to a project's
//!   domain, stage and subtype, general to specific
//! - **Audit checks**: the per-domain check table, extension-contributed
//!   checks namespaced as `extension:check`, and their evaluation
//!
//! # Architecture
//!
//! ```text
//!                    CLI
//!                     |
//!                praxis-core
//!                     |
//!          +----------+----------+
//!          |                     |
//!     praxis-fs          praxis-extensions
//! ```
//!
//! Every entry point re-reads the filesystem; nothing is cached between calls.

pub mod audit;
pub mod domain;
pub mod error;
pub mod opinions;
pub mod project;

pub use audit::{
    AuditCheck, AuditCheckRegistry, AuditReport, AuditResult, CheckKind, CheckOutcome, Severity,
    run_audit,
};
pub use domain::{Domain, ProjectContext, Stage};
pub use error::{Error, Result};
pub use opinions::{
    CORE_SOURCE, Frontmatter, MergedOpinions, OpinionFile, OpinionStatus, OpinionsResolver,
    ResolvedOpinions, build_chain, load_opinion_file, merge_contributions,
};
pub use project::ProjectConfig;

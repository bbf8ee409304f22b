//! Extension system for Praxis.
//!
//! This crate provides the `praxis-extension.yaml` manifest schema, the
//! loader that validates one extension at a time while isolating
//! malformed contributions, and the [`WorkspaceContext`] describing which
//! extensions are installed.

pub mod config;
pub mod error;
pub mod loader;
pub mod manifest;

/// Manifest versions this build understands.
pub const SUPPORTED_MANIFEST_VERSIONS: &[&str] = &["0.1"];

pub use config::WorkspaceContext;
pub use error::{Error, Result};
pub use loader::{FailedExtension, InstalledExtensions, LoadedManifest, load_installed, load_manifest};
pub use manifest::{
    AuditCheckContribution, AuditContribution, CheckType, Contributions, ExtensionManifest,
    OpinionContribution,
};

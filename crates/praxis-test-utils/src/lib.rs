//! Shared test utilities for the Praxis workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`]: [`TestWorkspace`] builder laying out an opinions tree,
//!   a workspace home with extensions, and a project directory

pub mod workspace;

pub use workspace::{TestWorkspace, opinion_doc};

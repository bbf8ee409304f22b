//! Filesystem abstraction for Praxis
//!
//! Provides normalized relative paths, read helpers, format-agnostic
//! configuration loading and the markdown tree walker used by the
//! opinion engine.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use constants::PraxisPath;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_relative_path};
pub use walk::{MarkdownWalker, WalkOutcome};

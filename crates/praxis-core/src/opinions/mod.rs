//! Opinion resolution
//!
//! - [`file`]: one markdown document into frontmatter plus body
//! - [`chain`]: candidate paths for a context, general to specific
//! - [`merge`]: core tree plus extension contributions, with precedence
//! - [`resolver`]: chain filtered against the merged tree

pub mod chain;
pub mod file;
pub mod merge;
pub mod resolver;

pub use chain::{SHARED_FIRST_PRINCIPLES, build_chain, subtype_segments};
pub use file::{Frontmatter, OpinionFile, OpinionStatus, load_opinion_file};
pub use merge::{CORE_SOURCE, MergedOpinions, is_excluded_from_core, merge_contributions};
pub use resolver::{MAX_ANCESTOR_LEVELS, OpinionsResolver, ResolvedOpinions};

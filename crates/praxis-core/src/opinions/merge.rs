//! Merging the core opinion tree with extension contributions.
//!
//! Precedence, independent of installation order:
//!
//! 1. A path present in the core tree always belongs to core.
//! 2. Among extensions, the alphabetically greatest name wins.
//!
//! Extensions are visited in reverse alphabetical order and names are
//! compared again on every conflict, so the winner does not depend on how
//! many extensions contribute the same path.

use std::collections::BTreeMap;
use std::path::Path;

use praxis_extensions::LoadedManifest;
use praxis_fs::{MarkdownWalker, NormalizedPath, PraxisPath};

use super::file::{OpinionFile, load_opinion_file};

/// Provenance tag of documents from the core tree.
pub const CORE_SOURCE: &str = "core";

/// The merged opinion address space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedOpinions {
    /// Every document keyed by its relative path.
    pub files: BTreeMap<String, OpinionFile>,
    /// Relative path to source name; mirrors `files[path].source`.
    pub provenance: BTreeMap<String, String>,
    pub warnings: Vec<String>,
}

impl MergedOpinions {
    fn insert(&mut self, file: OpinionFile) {
        self.provenance.insert(file.path.clone(), file.source.clone());
        self.files.insert(file.path.clone(), file);
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Whether a path below the core root is left out of the walk.
///
/// Excludes top-level entries starting with `_` other than `_shared`, and
/// anything below a `_templates` directory at any depth.
pub fn is_excluded_from_core(rel: &NormalizedPath) -> bool {
    let shared = PraxisPath::SharedDir.as_str();
    let templates = PraxisPath::TemplatesDir.as_str();

    if let Some(first) = rel.first_segment() {
        if first.starts_with('_') && first != shared {
            return true;
        }
    }
    rel.segments().any(|s| s == templates)
}

/// Build the merged map from the core tree at `core_root` and every
/// successfully loaded extension.
pub fn merge_contributions(core_root: &Path, extensions: &[LoadedManifest]) -> MergedOpinions {
    let mut merged = MergedOpinions::default();

    let outcome = MarkdownWalker::new(core_root)
        .exclude(is_excluded_from_core)
        .walk();
    for error in outcome.errors {
        merged.warn(format!("core opinions: {error}"));
    }
    for walked in outcome.files {
        let file = load_opinion_file(&walked.absolute, walked.relative.as_str(), CORE_SOURCE);
        merged.insert(file);
    }
    tracing::debug!("Core tree contributed {} opinion(s)", merged.files.len());

    let mut ordered: Vec<&LoadedManifest> = extensions.iter().collect();
    ordered.sort_by(|a, b| b.name().cmp(a.name()));

    for extension in ordered {
        merge_extension(&mut merged, extension);
    }

    merged
}

fn merge_extension(merged: &mut MergedOpinions, extension: &LoadedManifest) {
    let name = extension.name();

    for contribution in &extension.manifest.contributions.opinions {
        let target = NormalizedPath::new(&contribution.target).as_str().to_string();
        let file = load_opinion_file(&extension.source_path(contribution), &target, name);
        if !file.exists {
            merged.warn(format!(
                "extension '{}': opinion source '{}' disappeared; skipped",
                name, contribution.source
            ));
            continue;
        }

        let existing = merged.files.get(&target).map(|f| f.source.clone());
        match existing {
            None => merged.insert(file),
            Some(owner) if owner == CORE_SOURCE => {
                merged.warn(format!(
                    "extension '{name}': opinion '{target}' is provided by core; contribution ignored"
                ));
            }
            Some(owner) if owner == name => {
                merged.warn(format!(
                    "extension '{name}': opinion '{target}' is declared more than once; keeping the first"
                ));
            }
            Some(owner) => {
                let (winner, loser) = if name > owner.as_str() {
                    (name.to_string(), owner)
                } else {
                    (owner, name.to_string())
                };
                if winner == name {
                    merged.insert(file);
                }
                merged.warn(format!(
                    "opinion '{target}' is contributed by both '{loser}' and '{winner}'; '{winner}' takes precedence"
                ));
            }
        }
    }
}

//! Recursive markdown discovery with a pluggable exclusion predicate.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, NormalizedPath};

type ExcludeFn = Box<dyn Fn(&NormalizedPath) -> bool>;

/// A markdown file found during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Slash-separated path relative to the walk root.
    pub relative: NormalizedPath,
    /// Absolute path on disk.
    pub absolute: PathBuf,
}

/// Everything a walk produced: the files, plus the entries it could not read.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<WalkedFile>,
    pub errors: Vec<Error>,
}

/// Walks a directory tree collecting `.md` files.
///
/// Results are sorted by relative path. Entries rejected by the exclusion
/// predicate are pruned, so an excluded directory is never descended into.
pub struct MarkdownWalker {
    root: PathBuf,
    exclude: Option<ExcludeFn>,
}

impl MarkdownWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: None,
        }
    }

    /// Install the exclusion predicate.
    ///
    /// The predicate receives the path relative to the root, for
    /// directories and files alike, and returns `true` to skip it.
    pub fn exclude(mut self, predicate: impl Fn(&NormalizedPath) -> bool + 'static) -> Self {
        self.exclude = Some(Box::new(predicate));
        self
    }

    /// Run the walk. A missing root yields an empty outcome.
    pub fn walk(&self) -> WalkOutcome {
        let mut outcome = WalkOutcome::default();
        if !self.root.is_dir() {
            return outcome;
        }

        let root = self.root.clone();
        let iter = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                match NormalizedPath::relative_to(entry.path(), &root) {
                    Some(rel) => !self.is_excluded(&rel),
                    None => false,
                }
            });

        for entry in iter {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    tracing::warn!("Skipping unreadable entry under {:?}: {}", path, e);
                    outcome.errors.push(Error::Walk {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            // Symlinked files count; symlinked directories are not descended.
            if !entry.path().is_file() {
                continue;
            }
            let is_markdown = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
            if !is_markdown {
                continue;
            }
            if let Some(relative) = NormalizedPath::relative_to(entry.path(), &root) {
                outcome.files.push(WalkedFile {
                    relative,
                    absolute: entry.path().to_path_buf(),
                });
            }
        }

        outcome.files.sort_by(|a, b| a.relative.cmp(&b.relative));
        tracing::debug!(
            "Walked {:?}: {} markdown file(s)",
            self.root,
            outcome.files.len()
        );
        outcome
    }

    fn is_excluded(&self, rel: &NormalizedPath) -> bool {
        self.exclude.as_ref().is_some_and(|f| f(rel))
    }
}

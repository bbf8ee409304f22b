//! Normalized path handling for cross-platform compatibility

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Opinion documents are addressed by slash-separated relative paths
/// (`code/subtypes/cli/README.md`) regardless of the host platform, so
/// every key that crosses a module boundary goes through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and collapses empty
    /// segments, so `code//README.md` and `code\README.md` compare equal
    /// to `code/README.md`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let replaced = path_str.replace('\\', "/");
        let leading = if replaced.starts_with('/') { "/" } else { "" };
        let body = replaced
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect::<Vec<_>>()
            .join("/");
        Self {
            inner: format!("{leading}{body}"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        if self.inner.is_empty() {
            return Self::new(segment);
        }
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Iterate over the slash-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('/').filter(|s| !s.is_empty())
    }

    /// First segment of the path, if any.
    pub fn first_segment(&self) -> Option<&str> {
        self.segments().next()
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Whether the path is rooted.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || Path::new(&self.inner).has_root()
    }

    /// Whether any segment is `..`.
    pub fn has_parent_traversal(&self) -> bool {
        self.segments().any(|s| s == "..")
    }

    /// Resolve this path against a native base directory.
    pub fn under(&self, base: &Path) -> PathBuf {
        self.segments().fold(base.to_path_buf(), |acc, s| acc.join(s))
    }

    /// Build the relative key for `path` below `root`.
    ///
    /// Returns `None` when `path` does not live under `root`.
    pub fn relative_to(path: &Path, root: &Path) -> Option<Self> {
        let rel = path.strip_prefix(root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(Self {
            inner: parts.join("/"),
        })
    }
}

/// Validate that a manifest-declared path stays inside its root.
///
/// The path must be non-empty, relative, and free of `..` components.
pub fn validate_relative_path(raw: &str) -> Result<NormalizedPath> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidPath {
            path: raw.to_string(),
            reason: "path must not be empty".to_string(),
        });
    }
    let path = NormalizedPath::new(raw);
    if path.is_absolute() || raw.contains(':') {
        return Err(Error::InvalidPath {
            path: raw.to_string(),
            reason: "path must be relative".to_string(),
        });
    }
    if path.has_parent_traversal() {
        return Err(Error::InvalidPath {
            path: raw.to_string(),
            reason: "path must not contain '..'".to_string(),
        });
    }
    Ok(path)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

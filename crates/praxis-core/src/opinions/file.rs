//! Loading a single opinion document: frontmatter plus markdown body.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use praxis_fs::io;

/// Publication status of an opinion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpinionStatus {
    Draft,
    Active,
    Deprecated,
}

impl std::fmt::Display for OpinionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Active => write!(f, "active"),
            Self::Deprecated => write!(f, "deprecated"),
        }
    }
}

/// Structured metadata at the top of an opinion document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(deserialize_with = "string_or_number")]
    pub version: String,
    pub status: OpinionStatus,
    /// Absent for shared, domain-independent documents.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub inherits: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub last_reviewed: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_yaml::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

/// One opinion document as seen by the resolver.
///
/// `exists == false` implies `frontmatter` and `content` are `None`. A
/// document with `parse_error` set still exists; it is found but its
/// metadata is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpinionFile {
    /// Slash-separated path in the merged opinion tree.
    pub path: String,
    pub exists: bool,
    pub frontmatter: Option<Frontmatter>,
    pub content: Option<String>,
    pub parse_error: Option<String>,
    /// `"core"` or the contributing extension's name.
    pub source: String,
}

impl OpinionFile {
    pub fn missing(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exists: false,
            frontmatter: None,
            content: None,
            parse_error: None,
            source: source.into(),
        }
    }

    pub fn status(&self) -> Option<OpinionStatus> {
        self.frontmatter.as_ref().map(|fm| fm.status)
    }
}

/// Load the document at `absolute`, addressed as `path` in the merged tree.
///
/// Never fails: a missing file yields `exists: false`, and anything wrong
/// with an existing file is reported through `parse_error`.
pub fn load_opinion_file(absolute: &Path, path: &str, source: &str) -> OpinionFile {
    let text = match io::read_text_if_exists(absolute) {
        Ok(Some(text)) => text,
        Ok(None) => return OpinionFile::missing(path, source),
        Err(e) => {
            tracing::warn!("Failed to read opinion {:?}: {}", absolute, e);
            return OpinionFile {
                parse_error: Some(e.to_string()),
                exists: true,
                ..OpinionFile::missing(path, source)
            };
        }
    };

    let (frontmatter, content, parse_error) = match split_frontmatter(&text) {
        None => (None, text.clone(), None),
        Some((yaml, body)) => match parse_frontmatter(yaml) {
            Ok(fm) => (Some(fm), body.to_string(), None),
            Err(e) => (None, body.to_string(), Some(e)),
        },
    };

    OpinionFile {
        path: path.to_string(),
        exists: true,
        frontmatter,
        content: Some(content),
        parse_error,
        source: source.to_string(),
    }
}

/// Split a leading `---` block off `text`.
///
/// Returns `(yaml, body)` when the first line is `---` and a later line is
/// `---`; `None` when there is no complete block.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" || !first.ends_with('\n') {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn parse_frontmatter(yaml: &str) -> Result<Frontmatter, String> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| format!("invalid YAML: {e}"))?;
    if !value.is_mapping() {
        return Err("frontmatter is not a mapping".to_string());
    }
    serde_yaml::from_value(value).map_err(|e| e.to_string())
}

//! Domain and lifecycle stage vocabulary

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Top-level work category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Code,
    Create,
    Write,
    Learn,
    Observe,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Self::Code,
        Self::Create,
        Self::Write,
        Self::Learn,
        Self::Observe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Create => "create",
            Self::Write => "write",
            Self::Learn => "learn",
            Self::Observe => "observe",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| Error::UnknownDomain {
                value: s.to_string(),
                expected: join(Self::ALL.iter().map(Domain::as_str)),
            })
    }
}

/// Lifecycle stage. Ordering follows the lifecycle, so
/// `Stage::Capture < Stage::Close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Capture,
    Sense,
    Explore,
    Shape,
    Formalize,
    Commit,
    Execute,
    Sustain,
    Close,
}

impl Stage {
    pub const ALL: [Stage; 9] = [
        Self::Capture,
        Self::Sense,
        Self::Explore,
        Self::Shape,
        Self::Formalize,
        Self::Commit,
        Self::Execute,
        Self::Sustain,
        Self::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capture => "capture",
            Self::Sense => "sense",
            Self::Explore => "explore",
            Self::Shape => "shape",
            Self::Formalize => "formalize",
            Self::Commit => "commit",
            Self::Execute => "execute",
            Self::Sustain => "sustain",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == wanted)
            .ok_or_else(|| Error::UnknownStage {
                value: s.to_string(),
                expected: join(Self::ALL.iter().map(Stage::as_str)),
            })
    }
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// The (domain, stage, subtype) triple opinions and audits are selected by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    pub domain: Domain,
    pub stage: Option<Stage>,
    pub subtype: Option<String>,
}

impl ProjectContext {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            stage: None,
            subtype: None,
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        let subtype = subtype.into();
        self.subtype = if subtype.trim().is_empty() {
            None
        } else {
            Some(subtype)
        };
        self
    }
}

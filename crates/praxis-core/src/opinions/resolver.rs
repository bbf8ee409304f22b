//! Selecting the opinions that apply to a project context.

use std::path::PathBuf;

use serde::Serialize;

use praxis_extensions::{InstalledExtensions, WorkspaceContext, load_installed};
use praxis_fs::{PraxisPath, io};

use super::chain::build_chain;
use super::file::{OpinionFile, OpinionStatus};
use super::merge::{MergedOpinions, merge_contributions};
use crate::domain::{Domain, ProjectContext, Stage};

/// How many ancestors of the start directory are searched for `opinions/`.
pub const MAX_ANCESTOR_LEVELS: usize = 5;

/// The documents applying to one context, general to specific.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOpinions {
    pub domain: Domain,
    pub stage: Option<Stage>,
    pub subtype: Option<String>,
    /// Existing documents only, in chain order.
    pub files: Vec<OpinionFile>,
    pub warnings: Vec<String>,
}

impl ResolvedOpinions {
    fn empty(ctx: &ProjectContext) -> Self {
        Self {
            domain: ctx.domain,
            stage: ctx.stage,
            subtype: ctx.subtype.clone(),
            files: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Resolves opinions against the current on-disk state.
///
/// Holds no cache: each call re-reads manifests and re-walks the trees.
#[derive(Debug, Clone)]
pub struct OpinionsResolver {
    workspace: WorkspaceContext,
    start_dir: PathBuf,
}

impl OpinionsResolver {
    /// `start_dir` is where the upward search for `opinions/` begins.
    pub fn new(workspace: WorkspaceContext, start_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace,
            start_dir: start_dir.into(),
        }
    }

    pub fn workspace(&self) -> &WorkspaceContext {
        &self.workspace
    }

    /// Locate the core opinions root, if any.
    pub fn find_opinions_root(&self) -> Option<PathBuf> {
        io::find_dir_upward(
            &self.start_dir,
            PraxisPath::OpinionsDir.as_str(),
            MAX_ANCESTOR_LEVELS,
        )
    }

    /// Resolve the opinions for `ctx`, loading extensions first.
    pub fn resolve(&self, ctx: &ProjectContext) -> ResolvedOpinions {
        let installed = load_installed(&self.workspace);
        self.resolve_with(&installed, ctx)
    }

    /// Resolve using extensions that were already loaded, so the same
    /// manifests can also feed the audit registry.
    pub fn resolve_with(
        &self,
        installed: &InstalledExtensions,
        ctx: &ProjectContext,
    ) -> ResolvedOpinions {
        let mut resolved = ResolvedOpinions::empty(ctx);
        resolved.warnings.extend(installed.warnings.iter().cloned());

        let Some(root) = self.find_opinions_root() else {
            resolved.warn(self.missing_root_warning());
            return resolved;
        };

        let merged = merge_contributions(&root, &installed.loaded);
        resolved.warnings.extend(merged.warnings.iter().cloned());

        let stage = ctx.stage.map(|s| s.as_str());
        let chain = build_chain(ctx.domain.as_str(), stage, ctx.subtype.as_deref());
        tracing::debug!("Resolution chain for {}: {:?}", ctx.domain, chain);

        for candidate in &chain {
            let Some(file) = merged.files.get(candidate) else {
                continue;
            };
            if !file.exists {
                continue;
            }
            if let Some(status) = file.status() {
                match status {
                    OpinionStatus::Deprecated => {
                        resolved.warn(format!("opinion '{}' is deprecated", file.path))
                    }
                    OpinionStatus::Draft | OpinionStatus::Active => {}
                }
            }
            if let Some(error) = &file.parse_error {
                resolved.warn(format!(
                    "opinion '{}' has invalid frontmatter: {}",
                    file.path, error
                ));
            }
            resolved.files.push(file.clone());
        }

        resolved
    }

    /// The whole merged address space, for tree display and diagnostics.
    pub fn list_all(&self) -> MergedOpinions {
        let installed = load_installed(&self.workspace);
        match self.find_opinions_root() {
            Some(root) => {
                let mut merged = merge_contributions(&root, &installed.loaded);
                let mut warnings = installed.warnings;
                warnings.append(&mut merged.warnings);
                merged.warnings = warnings;
                merged
            }
            None => MergedOpinions {
                warnings: vec![self.missing_root_warning()],
                ..MergedOpinions::default()
            },
        }
    }

    fn missing_root_warning(&self) -> String {
        format!(
            "no '{}' directory found within {} level(s) above {}",
            PraxisPath::OpinionsDir,
            MAX_ANCESTOR_LEVELS,
            self.start_dir.display()
        )
    }
}

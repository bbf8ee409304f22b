//! Resolving the workspace and project context for a command
//!
//! The workspace comes from `--home` / `PRAXIS_HOME`; the project context
//! from the project's praxis.yaml with command-line overrides on top.

use std::path::{Path, PathBuf};

use praxis_core::{Domain, ProjectConfig, ProjectContext, Stage};
use praxis_extensions::WorkspaceContext;
use praxis_fs::PraxisPath;

use crate::cli::ContextArgs;
use crate::error::{CliError, Result};

/// A project directory and the context opinions/audits are selected by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSelection {
    pub dir: PathBuf,
    pub context: ProjectContext,
}

/// Load the workspace at `home`. Without a home no extensions are installed.
pub fn load_workspace(home: Option<&Path>, fallback_root: &Path) -> Result<WorkspaceContext> {
    match home {
        Some(home) => {
            tracing::debug!("Loading workspace from {}", home.display());
            Ok(WorkspaceContext::load(home)?)
        }
        None => {
            tracing::debug!("No workspace home given; running without extensions");
            Ok(WorkspaceContext::new(fallback_root, Vec::new()))
        }
    }
}

/// Combine praxis.yaml in the project directory with the command flags.
pub fn select_project(args: &ContextArgs, cwd: &Path) -> Result<ProjectSelection> {
    let dir = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };

    let from_file = if dir.join(PraxisPath::ProjectConfig.as_str()).is_file() {
        Some(ProjectConfig::load(&dir)?.context())
    } else {
        None
    };

    let domain = match (&args.domain, &from_file) {
        (Some(raw), _) => raw.parse::<Domain>()?,
        (None, Some(ctx)) => ctx.domain,
        (None, None) => {
            return Err(CliError::user(format!(
                "No {} found in {} and no --domain given",
                PraxisPath::ProjectConfig,
                dir.display()
            )));
        }
    };

    let mut context = ProjectContext::new(domain);
    context.stage = match &args.stage {
        Some(raw) => Some(raw.parse::<Stage>()?),
        None => from_file.as_ref().and_then(|ctx| ctx.stage),
    };
    let subtype = args
        .subtype
        .clone()
        .or_else(|| from_file.and_then(|ctx| ctx.subtype));
    if let Some(subtype) = subtype {
        context = context.with_subtype(subtype);
    }

    Ok(ProjectSelection { dir, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_without_project_file() {
        let temp = TempDir::new().unwrap();
        let args = ContextArgs {
            domain: Some("code".to_string()),
            stage: Some("execute".to_string()),
            subtype: Some("cli".to_string()),
            path: None,
        };

        let selection = select_project(&args, temp.path()).unwrap();

        assert_eq!(selection.dir, temp.path());
        assert_eq!(
            selection.context,
            ProjectContext::new(Domain::Code)
                .with_stage(Stage::Execute)
                .with_subtype("cli")
        );
    }

    #[test]
    fn test_flags_override_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("praxis.yaml"),
            "domain: write\nstage: capture\nsubtype: essay\n",
        )
        .unwrap();
        let args = ContextArgs {
            stage: Some("shape".to_string()),
            ..ContextArgs::default()
        };

        let selection = select_project(&args, temp.path()).unwrap();

        assert_eq!(selection.context.domain, Domain::Write);
        assert_eq!(selection.context.stage, Some(Stage::Shape));
        assert_eq!(selection.context.subtype.as_deref(), Some("essay"));
    }

    #[test]
    fn test_relative_path_is_joined_to_cwd() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("proj")).unwrap();
        fs::write(temp.path().join("proj/praxis.yaml"), "domain: learn\n").unwrap();
        let args = ContextArgs {
            path: Some(PathBuf::from("proj")),
            ..ContextArgs::default()
        };

        let selection = select_project(&args, temp.path()).unwrap();

        assert_eq!(selection.dir, temp.path().join("proj"));
        assert_eq!(selection.context.domain, Domain::Learn);
    }

    #[test]
    fn test_missing_domain_is_user_error() {
        let temp = TempDir::new().unwrap();
        let err = select_project(&ContextArgs::default(), temp.path()).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_unknown_domain_flag() {
        let temp = TempDir::new().unwrap();
        let args = ContextArgs {
            domain: Some("gardening".to_string()),
            ..ContextArgs::default()
        };
        let err = select_project(&args, temp.path()).unwrap_err();
        assert!(err.to_string().contains("gardening"));
    }

    #[test]
    fn test_workspace_without_home_has_no_extensions() {
        let temp = TempDir::new().unwrap();
        let ws = load_workspace(None, temp.path()).unwrap();
        assert!(ws.installed_extensions().is_empty());
    }
}

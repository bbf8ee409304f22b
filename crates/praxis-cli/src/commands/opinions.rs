//! `praxis opinions` implementation

use std::path::Path;

use colored::Colorize;
use praxis_core::{OpinionsResolver, ResolvedOpinions};
use praxis_extensions::WorkspaceContext;

use super::print_warnings;
use crate::context::ProjectSelection;
use crate::error::{CliError, Result};

/// Print the opinions resolved for the selected project.
pub fn run_opinions(
    workspace: WorkspaceContext,
    selection: &ProjectSelection,
    json: bool,
    strict: bool,
) -> Result<()> {
    let resolver = OpinionsResolver::new(workspace, &selection.dir);
    let resolved = resolver.resolve(&selection.context);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_resolved(&resolved);
    }

    check_strict(strict, resolved.warnings.len())
}

/// Print every document in the merged tree with its source.
pub fn run_opinions_tree(
    workspace: WorkspaceContext,
    start_dir: &Path,
    json: bool,
    strict: bool,
) -> Result<()> {
    let resolver = OpinionsResolver::new(workspace, start_dir);
    let merged = resolver.list_all();

    if json {
        let output = serde_json::json!({
            "files": merged.provenance,
            "warnings": merged.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if merged.files.is_empty() {
            println!("{} No opinions found.", "=>".blue().bold());
        } else {
            println!("{} {} opinion(s):", "=>".blue().bold(), merged.files.len());
        }
        for (path, source) in &merged.provenance {
            println!("  {} {}", path, format!("[{source}]").dimmed());
        }
        print_warnings(&merged.warnings);
    }

    check_strict(strict, merged.warnings.len())
}

fn print_resolved(resolved: &ResolvedOpinions) {
    let mut header = resolved.domain.to_string();
    if let Some(stage) = resolved.stage {
        header.push_str(&format!(" / {stage}"));
    }
    if let Some(subtype) = &resolved.subtype {
        header.push_str(&format!(" / {subtype}"));
    }
    println!("{} Opinions for {}", "=>".blue().bold(), header.cyan());

    if resolved.files.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for file in &resolved.files {
        let status = file
            .status()
            .map(|s| format!(" {s}"))
            .unwrap_or_default();
        println!(
            "  {}{} {}",
            file.path.bold(),
            status.dimmed(),
            format!("[{}]", file.source).dimmed()
        );
    }
    print_warnings(&resolved.warnings);
}

fn check_strict(strict: bool, warnings: usize) -> Result<()> {
    if strict && warnings > 0 {
        return Err(CliError::failed(format!(
            "{warnings} warning(s) reported in strict mode"
        )));
    }
    Ok(())
}

//! `praxis extensions` implementation
//!
//! Lists every installed extension with what it contributes, or why it
//! could not be loaded.

use colored::Colorize;
use praxis_extensions::{InstalledExtensions, WorkspaceContext, load_installed};
use serde_json::json;

use crate::error::Result;

pub fn run_extensions(workspace: &WorkspaceContext, json: bool) -> Result<()> {
    let installed = load_installed(workspace);

    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(&installed))?);
        return Ok(());
    }

    if workspace.installed_extensions().is_empty() {
        println!(
            "{} No extensions installed in {}",
            "=>".blue().bold(),
            workspace.root().display()
        );
        return Ok(());
    }

    println!(
        "{} {} extension(s) installed:",
        "=>".blue().bold(),
        workspace.installed_extensions().len()
    );
    for name in workspace.installed_extensions() {
        if let Some(loaded) = installed.loaded.iter().find(|l| l.name() == name) {
            let contributions = &loaded.manifest.contributions;
            let checks: usize = contributions.audits.iter().map(|a| a.checks.len()).sum();
            println!(
                "  {} {} - {} opinion(s), {} audit check(s)",
                "ok".green(),
                name.bold(),
                contributions.opinions.len(),
                checks
            );
            if let Some(description) = &loaded.manifest.description {
                println!("     {}", description.dimmed());
            }
            for warning in &loaded.warnings {
                println!("     [{}] {}", "warn".yellow(), warning);
            }
        } else if let Some(failed) = installed.failed.iter().find(|f| &f.name == name) {
            println!("  {} {} - {}", "failed".red(), name.bold(), failed.error);
        }
    }

    Ok(())
}

fn to_json(installed: &InstalledExtensions) -> serde_json::Value {
    let loaded: Vec<_> = installed
        .loaded
        .iter()
        .map(|l| {
            json!({
                "name": l.name(),
                "status": "ok",
                "description": l.manifest.description,
                "opinions": l.manifest.contributions.opinions.len(),
                "audits": l.manifest.contributions.audits.iter().map(|a| a.checks.len()).sum::<usize>(),
                "warnings": l.warnings,
            })
        })
        .collect();
    let failed: Vec<_> = installed
        .failed
        .iter()
        .map(|f| {
            json!({
                "name": f.name,
                "status": "failed",
                "error": f.error.to_string(),
            })
        })
        .collect();
    json!({ "loaded": loaded, "failed": failed })
}

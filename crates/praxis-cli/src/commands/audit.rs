//! `praxis audit` implementation

use colored::Colorize;
use praxis_core::{AuditCheckRegistry, AuditReport, CheckOutcome, run_audit};
use praxis_extensions::{WorkspaceContext, load_installed};

use super::print_warnings;
use crate::context::ProjectSelection;
use crate::error::{CliError, Result};

/// Run the merged check table against the selected project.
///
/// Fails when any check failed, or in strict mode when anything warned.
pub fn run_audit_command(
    workspace: &WorkspaceContext,
    selection: &ProjectSelection,
    json: bool,
    strict: bool,
) -> Result<()> {
    let installed = load_installed(workspace);
    let registry = AuditCheckRegistry::from_installed(&installed);
    let mut report = run_audit(&registry, &selection.context, &selection.dir);

    let mut warnings = installed.warnings;
    warnings.append(&mut report.warnings);
    report.warnings = warnings;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    let failed = report.count(CheckOutcome::Failed);
    if failed > 0 {
        return Err(CliError::failed(format!("{failed} audit check(s) failed")));
    }
    let warned = report.count(CheckOutcome::Warning) + report.warnings.len();
    if strict && warned > 0 {
        return Err(CliError::failed(format!(
            "{warned} warning(s) reported in strict mode"
        )));
    }
    Ok(())
}

fn print_report(report: &AuditReport) {
    println!(
        "{} Audit for {}{}",
        "=>".blue().bold(),
        report.domain.to_string().cyan(),
        report
            .stage
            .map(|s| format!(" / {s}"))
            .unwrap_or_default()
            .cyan()
    );

    for result in &report.results {
        let label = match result.status {
            CheckOutcome::Passed => "pass".green(),
            CheckOutcome::Warning => "warn".yellow(),
            CheckOutcome::Failed => "fail".red(),
        };
        println!(
            "  [{}] {} {} {}",
            label,
            result.name.bold(),
            result.message,
            format!("({})", result.category).dimmed()
        );
    }

    println!(
        "  {} passed, {} warning(s), {} failed",
        report.count(CheckOutcome::Passed),
        report.count(CheckOutcome::Warning),
        report.count(CheckOutcome::Failed)
    );
    print_warnings(&report.warnings);
}

//! Praxis CLI
//!
//! Shows the opinions and runs the audit checks that apply to a project's
//! domain, lifecycle stage and subtype.

mod cli;
mod commands;
mod context;
mod error;

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        match e {
            CliError::Failed { message } => eprintln!("{}: {}", "failed".red().bold(), message),
            other => eprintln!("{}: {}", "error".red().bold(), other),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warn".yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.home.as_deref()),
        None => {
            println!("{} Praxis CLI", "praxis".green().bold());
            println!();
            println!("Run {} for available commands.", "praxis --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, home: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Opinions {
            context: args,
            json,
            tree,
            strict,
        } => {
            let workspace = context::load_workspace(home, &cwd)?;
            if tree {
                let start = match &args.path {
                    Some(path) => cwd.join(path),
                    None => cwd.clone(),
                };
                commands::run_opinions_tree(workspace, &start, json, strict)
            } else {
                let selection = context::select_project(&args, &cwd)?;
                commands::run_opinions(workspace, &selection, json, strict)
            }
        }
        Commands::Audit {
            context: args,
            json,
            strict,
        } => {
            let workspace = context::load_workspace(home, &cwd)?;
            let selection = context::select_project(&args, &cwd)?;
            commands::run_audit_command(&workspace, &selection, json, strict)
        }
        Commands::Extensions { json } => {
            let Some(home) = home else {
                return Err(CliError::user(
                    "No workspace given. Pass --home or set PRAXIS_HOME.",
                ));
            };
            let workspace = context::load_workspace(Some(home), &cwd)?;
            commands::run_extensions(&workspace, json)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "praxis", &mut io::stdout());
            Ok(())
        }
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Praxis - Opinions and audits for the project you are working on
#[derive(Parser, Debug)]
#[command(name = "praxis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root holding workspace-config.yaml and extensions/
    #[arg(long, global = true, env = "PRAXIS_HOME")]
    pub home: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Project selection shared by `opinions` and `audit`.
///
/// Flags override the values read from the project's praxis.yaml.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextArgs {
    /// Domain (code, create, write, learn, observe)
    #[arg(long)]
    pub domain: Option<String>,

    /// Lifecycle stage
    #[arg(long)]
    pub stage: Option<String>,

    /// Subtype, e.g. cli-python
    #[arg(long)]
    pub subtype: Option<String>,

    /// Project directory (defaults to the current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the opinions that apply to a project, general to specific
    ///
    /// Examples:
    ///   praxis opinions                          # Use ./praxis.yaml
    ///   praxis opinions --domain code --stage execute --subtype cli-python
    ///   praxis opinions --tree                   # Every known opinion and its source
    Opinions {
        #[command(flatten)]
        context: ContextArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// List the whole merged opinion tree with provenance
        #[arg(long)]
        tree: bool,

        /// Exit non-zero when any warning was produced
        #[arg(long)]
        strict: bool,
    },

    /// Run the audit checks for a project
    Audit {
        #[command(flatten)]
        context: ContextArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Exit non-zero on warnings as well as failures
        #[arg(long)]
        strict: bool,
    },

    /// List installed extensions and their load status
    Extensions {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

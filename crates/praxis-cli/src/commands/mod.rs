//! Command implementations for praxis-cli

pub mod audit;
pub mod extension;
pub mod opinions;

use colored::Colorize;

pub use audit::run_audit_command;
pub use extension::run_extensions;
pub use opinions::{run_opinions, run_opinions_tree};

/// Print accumulated warnings after a command's main output.
pub(crate) fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("{} {} warning(s):", "!!".yellow().bold(), warnings.len());
    for warning in warnings {
        println!("  [{}] {}", "warn".yellow(), warning);
    }
}

//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} values are not valid identifiers")]
    InvalidIdentifiers { invalid: usize, total: usize },

    #[error("Document error: {0}")]
    Document(#[from] fgc_id::IdError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidIdentifiers { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Use `fgc normalize` to replace invalid values with new identifiers."
                        .yellow()
                );
            }
            CliError::Document(fgc_id::IdError::NotAnObject) => {
                eprintln!(
                    "\n{}",
                    "Hint: The document root must be a JSON object.".yellow()
                );
            }
            _ => {}
        }
    }
}

//! CLI commands.

mod check;
mod new;
mod normalize;
mod stamp;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fgc_id::{IdGenerator, RandomIdGenerator, SeededIdGenerator};

use crate::output::OutputFormat;

/// fgc - Validate, normalize, and generate flowgraph identifiers.
#[derive(Debug, Parser)]
#[command(name = "fgc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "FGC_FORMAT")]
    format: Option<String>,

    /// Seed for reproducible identifier generation.
    #[arg(long, global = true, env = "FGC_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new random identifiers.
    New(new::NewCommand),

    /// Validate values and print their canonical form.
    Check(check::CheckCommand),

    /// Normalize values, replacing invalid ones with new identifiers.
    Normalize(normalize::NormalizeCommand),

    /// Ensure a JSON document carries a valid identifier.
    Stamp(stamp::StampCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_deref() {
            Some(value) => OutputFormat::parse(value)
                .with_context(|| format!("Unknown format '{value}' (expected table or json)"))?,
            None => OutputFormat::default(),
        };

        let generator: Box<dyn IdGenerator> = match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "using seeded generator");
                Box::new(SeededIdGenerator::new(seed))
            }
            None => Box::new(RandomIdGenerator::new()),
        };

        let ctx = CommandContext { format, generator };

        match self.command {
            Commands::New(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Normalize(cmd) => cmd.run(&ctx),
            Commands::Stamp(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("fgc {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub generator: Box<dyn IdGenerator>,
}

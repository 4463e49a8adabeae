//! Identifier generation.

use anyhow::Result;
use clap::Args;
use fgc_id::{FlowgraphId, IdGenerator};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, OutputFormat};

use super::CommandContext;

/// Upper bound for `--count`.
const MAX_COUNT: u32 = 10_000;

/// Generate new random identifiers.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Number of identifiers to generate (1 to 10000).
    #[arg(
        long,
        short = 'n',
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_COUNT))
    )]
    count: u32,
}

#[derive(Debug, Serialize, Tabled)]
struct NewRow {
    id: String,
}

impl NewCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = generate(self.count, ctx.generator.as_ref());
        tracing::debug!(count = rows.len(), "generated identifiers");

        match ctx.format {
            OutputFormat::Json => print_output(&rows, ctx.format),
            OutputFormat::Table => {
                // One per line so the output can be piped.
                for row in &rows {
                    println!("{}", row.id);
                }
            }
        }

        Ok(())
    }
}

fn generate(count: u32, generator: &dyn IdGenerator) -> Vec<NewRow> {
    (0..count)
        .map(|_| NewRow {
            id: FlowgraphId::generate(generator).to_string(),
        })
        .collect()
}

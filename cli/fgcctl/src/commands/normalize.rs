//! Normalize-or-replace for a list of values.

use anyhow::Result;
use clap::Args;
use fgc_id::{normalize_or_generate_with, normalize_or_none, IdGenerator};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Normalize values, replacing invalid ones with new identifiers.
#[derive(Debug, Args)]
pub struct NormalizeCommand {
    /// Values to normalize.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct NormalizeRow {
    input: String,
    id: String,
    outcome: &'static str,
}

impl NormalizeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = normalize_values(&self.values, ctx.generator.as_ref());
        let generated = rows.iter().filter(|r| r.outcome == "generated").count();
        tracing::debug!(total = rows.len(), generated, "normalized values");

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn normalize_values(values: &[String], generator: &dyn IdGenerator) -> Vec<NormalizeRow> {
    values
        .iter()
        .map(|input| {
            let outcome = match normalize_or_none(input) {
                Some(id) if id == *input => "kept",
                Some(_) => "normalized",
                None => "generated",
            };
            NormalizeRow {
                input: input.clone(),
                id: normalize_or_generate_with(input, generator),
                outcome,
            }
        })
        .collect()
}

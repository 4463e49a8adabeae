//! Document identifier repair.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use fgc_id::{ensure_document_id, IdGenerator, StampReport, DEFAULT_ID_FIELD};

use crate::error::CliError;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Ensure a JSON document carries a valid identifier.
#[derive(Debug, Args)]
pub struct StampCommand {
    /// Path to the JSON document.
    path: PathBuf,

    /// Name of the identifier field.
    #[arg(long, default_value = DEFAULT_ID_FIELD)]
    field: String,

    /// Write the repaired document back to disk.
    #[arg(long)]
    write: bool,
}

impl StampCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let report = stamp_file(&self.path, &self.field, self.write, ctx.generator.as_ref())?;

        match ctx.format {
            OutputFormat::Json => print_single(&report),
            OutputFormat::Table => {
                let message = format!("{} {} ({})", self.field, report.id, report.stamp.label());
                if report.stamp.changed() && !self.write {
                    print_info(&message);
                    print_info("Document not modified; pass --write to save it.");
                } else {
                    print_success(&message);
                }
            }
        }

        Ok(())
    }
}

fn stamp_file(
    path: &Path,
    field: &str,
    write: bool,
    generator: &dyn IdGenerator,
) -> Result<StampReport> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut doc: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    let report = ensure_document_id(&mut doc, field, generator).map_err(CliError::from)?;
    tracing::info!(
        path = %path.display(),
        field,
        outcome = report.stamp.label(),
        id = %report.id,
        "stamped document"
    );

    if write && report.stamp.changed() {
        let mut contents = serde_json::to_string_pretty(&doc)?;
        contents.push('\n');
        fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "document written");
    }

    Ok(report)
}

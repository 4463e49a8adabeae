//! Identifier validation.

use std::borrow::Cow;

use anyhow::Result;
use clap::Args;
use fgc_id::{is_canonical, normalize_or_none};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Validate values and print their canonical form.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Only accept values that are already canonical.
    #[arg(long)]
    strict: bool,

    /// Values to check.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckRow {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
}

impl Tabled for CheckRow {
    const LENGTH: usize = 3;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.input.as_str()),
            Cow::Owned(self.valid.to_string()),
            Cow::Borrowed(self.canonical.as_deref().unwrap_or("-")),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            Cow::Borrowed("input"),
            Cow::Borrowed("valid"),
            Cow::Borrowed("canonical"),
        ]
    }
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let rows = check_values(&self.values, self.strict);
        let invalid = rows.iter().filter(|r| !r.valid).count();
        tracing::debug!(total = rows.len(), invalid, strict = self.strict, "checked values");

        print_output(&rows, ctx.format);

        if invalid > 0 {
            return Err(CliError::InvalidIdentifiers {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn check_values(values: &[String], strict: bool) -> Vec<CheckRow> {
    values
        .iter()
        .map(|input| {
            let canonical = if strict && !is_canonical(input) {
                None
            } else {
                normalize_or_none(input)
            };
            CheckRow {
                input: input.clone(),
                valid: canonical.is_some(),
                canonical,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use fgc_id::SeededIdGenerator;

    const SAMPLE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn context() -> CommandContext {
        CommandContext {
            format: OutputFormat::Json,
            generator: Box::new(SeededIdGenerator::new(1)),
        }
    }

    fn command(strict: bool, items: &[&str]) -> CheckCommand {
        CheckCommand {
            strict,
            values: values(items),
        }
    }

    #[test]
    fn test_check_lenient() {
        let upper = SAMPLE.to_uppercase();
        let rows = check_values(&values(&[SAMPLE, upper.as_str(), "nope"]), false);
        assert!(rows[0].valid);
        assert_eq!(rows[0].canonical.as_deref(), Some(SAMPLE));
        assert!(rows[1].valid);
        assert_eq!(rows[1].canonical.as_deref(), Some(SAMPLE));
        assert!(!rows[2].valid);
        assert_eq!(rows[2].canonical, None);
    }

    #[test]
    fn test_check_strict() {
        let upper = SAMPLE.to_uppercase();
        let rows = check_values(&values(&[SAMPLE, upper.as_str()]), true);
        assert!(rows[0].valid);
        assert!(!rows[1].valid);
    }

    #[test]
    fn test_invalid_row_omits_canonical_in_json() {
        let rows = check_values(&values(&["nope"]), false);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "input": "nope", "valid": false }));
    }

    #[test]
    fn test_table_fields_mark_missing_canonical() {
        let rows = check_values(&values(&["nope"]), false);
        assert_eq!(rows[0].fields(), vec!["nope", "false", "-"]);
        assert_eq!(CheckRow::headers().len(), CheckRow::LENGTH);
    }

    #[test]
    fn test_run_fails_when_any_value_invalid() {
        let err = command(false, &[SAMPLE, "not-a-uuid"])
            .run(&context())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidIdentifiers {
                invalid: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn test_run_succeeds_when_all_values_valid() {
        let upper = SAMPLE.to_uppercase();
        assert!(command(false, &[SAMPLE, upper.as_str()])
            .run(&context())
            .is_ok());
    }

    #[test]
    fn test_run_strict_rejects_uppercase() {
        let upper = SAMPLE.to_uppercase();
        let err = command(true, &[SAMPLE, upper.as_str()])
            .run(&context())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidIdentifiers {
                invalid: 1,
                total: 2
            })
        ));
    }
}

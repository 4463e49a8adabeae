//! Identifier repair for loaded flowgraph documents.

use serde::Serialize;
use serde_json::Value;

use crate::error::IdError;
use crate::generator::IdGenerator;
use crate::normalize::{normalize_or_generate_with, normalize_or_none};

/// Field that holds a flowgraph document's identifier.
pub const DEFAULT_ID_FIELD: &str = "uuid";

/// What happened to a document's identifier field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Stamp {
    /// The field already held a canonical identifier.
    Kept,
    /// The field held an identifier in a non-canonical form.
    Normalized { previous: String },
    /// The field was missing or invalid and a new identifier was written.
    Generated { previous: Option<Value> },
}

impl Stamp {
    /// Returns true if the document was modified.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Stamp::Kept)
    }

    /// Short label for the outcome.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Stamp::Kept => "kept",
            Stamp::Normalized { .. } => "normalized",
            Stamp::Generated { .. } => "generated",
        }
    }
}

/// Result of [`ensure_document_id`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampReport {
    /// The identifier the document now carries.
    pub id: String,
    /// What happened to the field.
    #[serde(flatten)]
    pub stamp: Stamp,
}

/// Ensures `doc[field]` holds a canonical identifier.
///
/// A valid identifier in any accepted form is rewritten canonically. A
/// missing, null, non-string or malformed field is replaced with a new
/// identifier from `generator`.
pub fn ensure_document_id(
    doc: &mut Value,
    field: &str,
    generator: &dyn IdGenerator,
) -> Result<StampReport, IdError> {
    let object = doc.as_object_mut().ok_or(IdError::NotAnObject)?;
    let previous = object.get(field);

    let stamp = match (normalize_or_none(previous), previous) {
        (Some(id), Some(Value::String(text))) if *text == id => {
            return Ok(StampReport {
                id,
                stamp: Stamp::Kept,
            });
        }
        (Some(_), Some(Value::String(text))) => Stamp::Normalized {
            previous: text.clone(),
        },
        _ => Stamp::Generated {
            previous: previous.cloned(),
        },
    };

    let id = normalize_or_generate_with(previous, generator);
    object.insert(field.to_string(), Value::String(id.clone()));

    Ok(StampReport { id, stamp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SeededIdGenerator;
    use crate::normalize::is_canonical;
    use serde_json::json;

    const SAMPLE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[test]
    fn test_kept() {
        let mut doc = json!({ "uuid": SAMPLE, "title": "fm_rx" });
        let report = ensure_document_id(&mut doc, DEFAULT_ID_FIELD, &SeededIdGenerator::new(1))
            .unwrap();
        assert_eq!(report.stamp, Stamp::Kept);
        assert!(!report.stamp.changed());
        assert_eq!(report.id, SAMPLE);
        assert_eq!(doc["uuid"], SAMPLE);
    }

    #[test]
    fn test_normalized() {
        let upper = SAMPLE.to_uppercase();
        let mut doc = json!({ "uuid": upper });
        let report = ensure_document_id(&mut doc, DEFAULT_ID_FIELD, &SeededIdGenerator::new(1))
            .unwrap();
        assert_eq!(report.stamp, Stamp::Normalized { previous: upper });
        assert_eq!(doc["uuid"], SAMPLE);
    }

    #[test]
    fn test_generated_when_missing() {
        let mut doc = json!({ "title": "fm_rx" });
        let report = ensure_document_id(&mut doc, DEFAULT_ID_FIELD, &SeededIdGenerator::new(1))
            .unwrap();
        assert_eq!(report.stamp, Stamp::Generated { previous: None });
        assert!(is_canonical(&report.id));
        assert_eq!(doc["uuid"], report.id.as_str());
        assert_eq!(doc["title"], "fm_rx");
    }

    #[test]
    fn test_generated_when_invalid() {
        for bad in [json!("not-a-uuid"), json!(7), json!(null), json!([SAMPLE])] {
            let mut doc = json!({ "uuid": bad.clone() });
            let report =
                ensure_document_id(&mut doc, DEFAULT_ID_FIELD, &SeededIdGenerator::new(1))
                    .unwrap();
            assert_eq!(report.stamp, Stamp::Generated { previous: Some(bad) });
            assert!(is_canonical(&report.id));
        }
    }

    #[test]
    fn test_generated_is_reproducible() {
        let mut a = json!({});
        let mut b = json!({});
        let ra = ensure_document_id(&mut a, "id", &SeededIdGenerator::new(11)).unwrap();
        let rb = ensure_document_id(&mut b, "id", &SeededIdGenerator::new(11)).unwrap();
        assert_eq!(ra.id, rb.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_field() {
        let mut doc = json!({ "uuid": "x", "doc_id": SAMPLE });
        let report = ensure_document_id(&mut doc, "doc_id", &SeededIdGenerator::new(1)).unwrap();
        assert_eq!(report.stamp, Stamp::Kept);
        assert_eq!(doc["uuid"], "x");
    }

    #[test]
    fn test_not_an_object() {
        let mut doc = json!([1, 2, 3]);
        let err = ensure_document_id(&mut doc, DEFAULT_ID_FIELD, &SeededIdGenerator::new(1))
            .unwrap_err();
        assert_eq!(err, IdError::NotAnObject);
        assert!(!err.is_syntax_error());
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = StampReport {
            id: SAMPLE.to_string(),
            stamp: Stamp::Normalized {
                previous: SAMPLE.to_uppercase(),
            },
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "id": SAMPLE,
                "outcome": "normalized",
                "previous": SAMPLE.to_uppercase(),
            })
        );
    }
}

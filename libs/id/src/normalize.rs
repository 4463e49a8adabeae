//! Validation and normalization of identifier candidates.
//!
//! These functions form the lenient contract used when reading external
//! data: anything that is not an identifier becomes `None`, and callers that
//! need a value regardless ask for a fresh one.

use uuid::Uuid;

use crate::candidate::IdCandidate;
use crate::error::IdError;
use crate::generator::{IdGenerator, RandomIdGenerator};

/// Length of the canonical hyphenated form.
pub const CANONICAL_LEN: usize = 36;

const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Returns the canonical form of `value`, or `None` if it is not an
/// identifier.
///
/// Structured values are rendered directly. Text is parsed with the uuid
/// crate's parser, which accepts the hyphenated form in either case, the
/// 32-digit simple form, and the braced and `urn:uuid:` forms. Absent values,
/// non-text values and malformed text all yield `None`.
pub fn normalize_or_none<'a>(value: impl Into<IdCandidate<'a>>) -> Option<String> {
    match value.into() {
        IdCandidate::Structured(uuid) => Some(canonical(uuid)),
        IdCandidate::Text(text) => Uuid::try_parse(text).ok().map(canonical),
        IdCandidate::Absent | IdCandidate::Unsupported => None,
    }
}

/// Returns the canonical form of `value`, or a fresh identifier if it is not
/// one.
pub fn normalize_or_generate<'a>(value: impl Into<IdCandidate<'a>>) -> String {
    normalize_or_generate_with(value, &RandomIdGenerator)
}

/// Like [`normalize_or_generate`], drawing replacements from `generator`.
pub fn normalize_or_generate_with<'a>(
    value: impl Into<IdCandidate<'a>>,
    generator: &dyn IdGenerator,
) -> String {
    normalize_or_none(value).unwrap_or_else(|| canonical(generator.generate()))
}

/// Returns a new random version-4 identifier in canonical form.
#[must_use]
pub fn generate_new() -> String {
    canonical(RandomIdGenerator.generate())
}

/// Returns true if `text` is exactly in canonical form.
#[must_use]
pub fn is_canonical(text: &str) -> bool {
    text.len() == CANONICAL_LEN
        && text.bytes().enumerate().all(|(i, b)| {
            if HYPHEN_OFFSETS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
            }
        })
}

/// Parses text that must already be in canonical form.
pub fn parse_canonical(text: &str) -> Result<Uuid, IdError> {
    if text.is_empty() {
        return Err(IdError::Empty);
    }

    let uuid = Uuid::try_parse(text).map_err(|e| IdError::InvalidUuid(e.to_string()))?;

    if !is_canonical(text) {
        return Err(IdError::NotCanonical {
            actual: text.to_string(),
        });
    }

    Ok(uuid)
}

fn canonical(uuid: Uuid) -> String {
    uuid.hyphenated().to_string()
}

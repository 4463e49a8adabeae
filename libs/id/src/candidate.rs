//! Inputs accepted by the normalization functions.

use uuid::Uuid;

/// A value that may or may not hold an identifier.
///
/// Callers rarely build this directly; the `From` impls let the
/// normalization functions take a `Uuid`, a string, an `Option` of either,
/// or a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCandidate<'a> {
    /// An already-parsed identifier.
    Structured(Uuid),
    /// Text that may be an identifier.
    Text(&'a str),
    /// No value at all.
    Absent,
    /// A value that is not string-like.
    Unsupported,
}

impl IdCandidate<'_> {
    /// Returns true if there is no value to inspect.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, IdCandidate::Absent)
    }
}

impl From<Uuid> for IdCandidate<'_> {
    fn from(uuid: Uuid) -> Self {
        IdCandidate::Structured(uuid)
    }
}

impl From<&Uuid> for IdCandidate<'_> {
    fn from(uuid: &Uuid) -> Self {
        IdCandidate::Structured(*uuid)
    }
}

impl<'a> From<&'a str> for IdCandidate<'a> {
    fn from(text: &'a str) -> Self {
        IdCandidate::Text(text)
    }
}

impl<'a> From<&'a String> for IdCandidate<'a> {
    fn from(text: &'a String) -> Self {
        IdCandidate::Text(text.as_str())
    }
}

impl<'a, T> From<Option<T>> for IdCandidate<'a>
where
    T: Into<IdCandidate<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(IdCandidate::Absent, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for IdCandidate<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => IdCandidate::Text(text),
            serde_json::Value::Null => IdCandidate::Absent,
            _ => IdCandidate::Unsupported,
        }
    }
}

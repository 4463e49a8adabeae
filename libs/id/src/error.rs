//! Error types for strict identifier parsing.

use thiserror::Error;

/// Errors returned by the strict parsing APIs.
///
/// The normalization functions never surface these; they collapse every
/// failure into `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The text is not a UUID in any form the parser accepts.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The text is a UUID but not in canonical lowercase hyphenated form.
    #[error("identifier is not canonical: got '{actual}'")]
    NotCanonical { actual: String },

    /// The document is not a JSON object, so it has no identifier field.
    #[error("document is not a JSON object")]
    NotAnObject,
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if the input text itself was rejected.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            IdError::Empty | IdError::InvalidUuid(_) | IdError::NotCanonical { .. }
        )
    }
}

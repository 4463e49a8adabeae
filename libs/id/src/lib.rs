//! # fgc-id
//!
//! UUID validation, normalization, and generation for flowgraph documents.
//!
//! ## Design Principles
//!
//! - Identifiers are 128-bit UUIDs, stored and exchanged as canonical text
//! - Validation never fails loudly: malformed or absent input yields `None`
//! - Callers that need an identifier unconditionally get a fresh v4 UUID
//! - The randomness source is injectable for reproducible output
//!
//! ## Canonical Format
//!
//! `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`: 36 characters, lowercase hex,
//! hyphens at offsets 8, 13, 18 and 23.
//!
//! ```
//! use fgc_id::{normalize_or_generate, normalize_or_none};
//!
//! assert_eq!(
//!     normalize_or_none("3FA85F64-5717-4562-B3FC-2C963F66AFA6").as_deref(),
//!     Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"),
//! );
//! assert_eq!(normalize_or_none("not-a-uuid"), None);
//! assert_eq!(normalize_or_generate(None::<&str>).len(), 36);
//! ```

mod candidate;
mod document;
mod error;
mod generator;
mod macros;
mod normalize;
mod types;

pub use candidate::IdCandidate;
pub use document::{ensure_document_id, Stamp, StampReport, DEFAULT_ID_FIELD};
pub use error::IdError;
pub use generator::{IdGenerator, RandomIdGenerator, SeededIdGenerator};
pub use normalize::{
    generate_new, is_canonical, normalize_or_generate, normalize_or_generate_with,
    normalize_or_none, parse_canonical, CANONICAL_LEN,
};
pub use types::*;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

//! Macros for defining typed identifier types.

/// Macro to define a typed identifier backed by a UUID.
///
/// This generates a newtype wrapper around `Uuid` with:
/// - `new()` to generate a fresh version-4 identifier
/// - `parse()` to parse canonical text strictly
/// - `Display` and `FromStr` implementations using the canonical form
/// - `Serialize` and `Deserialize` implementations
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_id!(FlowgraphId);
///
/// let id = FlowgraphId::new();
/// let parsed: FlowgraphId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse()?;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        /// A typed identifier for this entity type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// Creates a new identifier with a fresh random UUID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Uuid::new_v4())
            }

            /// Creates an identifier from a generator.
            #[must_use]
            pub fn generate(generator: &dyn $crate::IdGenerator) -> Self {
                Self(generator.generate())
            }

            /// Creates an identifier from a raw UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            /// Parses an identifier from its canonical string form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::parse_canonical(s).map(Self)
            }

            /// Parses any text the normalization rules accept.
            #[must_use]
            pub fn from_candidate<'a>(value: impl Into<$crate::IdCandidate<'a>>) -> Option<Self> {
                $crate::normalize_or_none(value)
                    .and_then(|s| $crate::parse_canonical(&s).ok())
                    .map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for $crate::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for $crate::IdCandidate<'_> {
            fn from(id: $name) -> Self {
                $crate::IdCandidate::Structured(id.0)
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }
    };
}

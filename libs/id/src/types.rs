//! Typed identifiers for flowgraph entities.

use crate::define_id;

// =============================================================================
// Documents
// =============================================================================

define_id!(FlowgraphId);

// =============================================================================
// Graph Contents
// =============================================================================

define_id!(BlockId);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{normalize_or_none, IdError, SeededIdGenerator, Uuid};

    const SAMPLE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[test]
    fn test_flowgraph_id_roundtrip() {
        let id = FlowgraphId::new();
        let s = id.to_string();
        let parsed: FlowgraphId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_flowgraph_id_is_canonical() {
        let s = FlowgraphId::new().to_string();
        assert!(crate::is_canonical(&s));
    }

    #[test]
    fn test_parse_rejects_uppercase() {
        let result: Result<FlowgraphId, _> = SAMPLE.to_uppercase().parse();
        assert!(matches!(
            result.unwrap_err(),
            IdError::NotCanonical { .. }
        ));
    }

    #[test]
    fn test_parse_empty() {
        let result: Result<BlockId, _> = "".parse();
        assert!(matches!(result.unwrap_err(), IdError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        let result: Result<BlockId, _> = "block_1".parse();
        assert!(matches!(result.unwrap_err(), IdError::InvalidUuid(_)));
    }

    #[test]
    fn test_from_candidate_is_lenient() {
        let id = FlowgraphId::from_candidate(SAMPLE.to_uppercase().as_str()).unwrap();
        assert_eq!(id.to_string(), SAMPLE);
        assert!(FlowgraphId::from_candidate("nope").is_none());
        assert!(FlowgraphId::from_candidate(None::<&str>).is_none());
    }

    #[test]
    fn test_generate_from_seed() {
        let a = BlockId::generate(&SeededIdGenerator::new(3));
        let b = BlockId::generate(&SeededIdGenerator::new(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_typed_id_normalizes() {
        let uuid = Uuid::parse_str(SAMPLE).unwrap();
        let id = BlockId::from_uuid(uuid);
        assert_eq!(normalize_or_none(id).as_deref(), Some(SAMPLE));
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id.uuid(), uuid);
    }

    #[test]
    fn test_flowgraph_id_json_roundtrip() {
        let id = FlowgraphId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: FlowgraphId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_json_rejects_non_canonical() {
        let json = format!("\"{}\"", SAMPLE.to_uppercase());
        assert!(serde_json::from_str::<FlowgraphId>(&json).is_err());
    }
}

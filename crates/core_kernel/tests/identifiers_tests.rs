//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover both identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{QuoteId, CalculationId};
use uuid::Uuid;

mod quote_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = QuoteId::new();
        let id2 = QuoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = QuoteId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = QuoteId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = QuoteId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(QuoteId::prefix(), "QTE");
    }

    #[test]
    fn test_display_format() {
        let id = QuoteId::new();
        let display = id.to_string();
        assert!(display.starts_with("QTE-"));
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = QuoteId::new();
        let string = original.to_string();
        let parsed: QuoteId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: QuoteId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id: QuoteId = uuid.into();
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_json_serialization() {
        let id = QuoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: QuoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod calculation_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = CalculationId::new();
        let id2 = CalculationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(CalculationId::prefix(), "CALC");
    }

    #[test]
    fn test_display_format() {
        let id = CalculationId::new();
        let display = id.to_string();
        assert!(display.starts_with("CALC-"));
    }

    #[test]
    fn test_roundtrip() {
        let original = CalculationId::new();
        let string = original.to_string();
        let parsed: CalculationId = string.parse().unwrap();
        assert_eq!(original, parsed);
    }
}

mod cross_type_tests {
    use super::*;

    #[test]
    fn test_different_id_types_are_distinct() {
        // Same UUID should create different identifier instances
        // that are type-safe (can't mix QuoteId with CalculationId)
        let uuid = Uuid::new_v4();
        let quote_id = QuoteId::from_uuid(uuid);
        let calculation_id = CalculationId::from_uuid(uuid);

        // They contain the same UUID but are different types
        assert_eq!(*quote_id.as_uuid(), *calculation_id.as_uuid());
    }

    #[test]
    fn test_id_prefixes_are_unique() {
        let prefixes = vec![QuoteId::prefix(), CalculationId::prefix()];

        let mut unique_prefixes: Vec<&str> = prefixes.clone();
        unique_prefixes.sort();
        unique_prefixes.dedup();

        assert_eq!(
            prefixes.len(),
            unique_prefixes.len(),
            "All identifier prefixes should be unique"
        );
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_nil_uuid() {
        let nil_uuid = Uuid::nil();
        let id = QuoteId::from_uuid(nil_uuid);
        assert!(id.as_uuid().is_nil());
    }

    #[test]
    fn test_max_uuid() {
        let max_uuid = Uuid::max();
        let id = QuoteId::from_uuid(max_uuid);
        assert_eq!(*id.as_uuid(), max_uuid);
    }
}

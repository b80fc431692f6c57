//! Property-based tests for context_logger using proptest

use context_logger::core::{normalize, normalize_value};
use context_logger::prelude::*;
use context_logger::REQUEST_ID_KEY;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn any_render_environment() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Testing),
        Just(Environment::Local),
        Just(Environment::Production),
        Just(Environment::Unspecified),
    ]
}

fn any_scalar() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        ".*".prop_map(FieldValue::String),
        any::<i64>().prop_map(FieldValue::Int),
        any::<f64>()
            .prop_filter("JSON has no non-finite numbers", |f| f.is_finite())
            .prop_map(FieldValue::Float),
        any::<bool>().prop_map(FieldValue::Bool),
        Just(FieldValue::Null),
    ]
}

fn any_field_value() -> impl Strategy<Value = FieldValue> {
    any_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(FieldValue::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..6).prop_map(FieldValue::Map),
        ]
    })
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_log_level_case_insensitive(level in any_level()) {
        let lower = level.to_str().to_lowercase();
        prop_assert_eq!(lower.parse::<LogLevel>(), Ok(level));
    }

    /// Enablement is `level >= min_level` whatever the render variant
    #[test]
    fn test_enabled_matches_ordering(
        level in any_level(),
        min_level in any_level(),
        environment in any_render_environment()
    ) {
        let logger = Logger::builder()
            .environment(environment)
            .min_level(min_level)
            .writer(LogWriter::discard())
            .build();

        prop_assert_eq!(
            logger.enabled(&Context::background(), level),
            level >= min_level
        );
    }
}

// ============================================================================
// Normalization Tests
// ============================================================================

proptest! {
    /// Encode-then-decode yields the same value, with no type confusion
    #[test]
    fn test_normalization_roundtrip(value in any_field_value()) {
        prop_assert_eq!(normalize_value(&value).unwrap(), value);
    }

    /// Integers never come back as strings or floats
    #[test]
    fn test_integers_stay_integers(n in any::<i64>()) {
        let normalized = normalize(&Fields::new().with_field("n", n)).unwrap();
        prop_assert_eq!(normalized["n"].as_i64(), Some(n));
        prop_assert_eq!(normalized["n"].to_string(), n.to_string());
    }

    /// Every key of a field set survives normalization
    #[test]
    fn test_normalization_keeps_keys(
        entries in prop::collection::btree_map("[a-z]{1,10}", any_scalar(), 0..10)
    ) {
        let fields: Fields = entries.clone().into_iter().collect();
        let normalized = normalize(&fields).unwrap();

        prop_assert_eq!(normalized.len(), entries.len());
        for (key, value) in entries {
            prop_assert_eq!(FieldValue::from_json(normalized[&key].clone()), value);
        }
    }
}

// ============================================================================
// Handler Chain Tests
// ============================================================================

proptest! {
    /// Any correlation id is carried into the encoded record verbatim
    #[test]
    fn test_request_id_is_injected(id in "[A-Za-z0-9-]{1,36}", level in any_level()) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let logger = Logger::builder()
            .environment(Environment::Production)
            .min_level(LogLevel::Debug)
            .writer(LogWriter::new(file.reopen().unwrap()))
            .build();
        let ctx = Context::background().with_request_id(id.as_str());

        logger.log(&ctx, level, "msg", Fields::new()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.trim_end()).unwrap();
        prop_assert_eq!(line[REQUEST_ID_KEY].as_str(), Some(id.as_str()));
        prop_assert_eq!(line["level"].as_str(), Some(level.to_str()));
    }

    /// Later inserts of the same key always win
    #[test]
    fn test_fields_last_write_wins(first in any::<i64>(), second in any::<i64>()) {
        let fields = Fields::new().with_field("k", first).with_field("k", second);
        prop_assert_eq!(fields.len(), 1);
        prop_assert_eq!(fields.get("k"), Some(&FieldValue::Int(second)));
    }

    /// Extending a field set with another preserves every key once
    #[test]
    fn test_extend_keeps_unique_keys(
        left in prop::collection::btree_map("[a-c]", any::<i64>(), 0..3),
        right in prop::collection::btree_map("[a-c]", any::<i64>(), 0..3)
    ) {
        let mut fields: Fields = left.clone().into_iter().collect();
        fields.extend(right.clone().into_iter().collect());

        let mut expected: BTreeMap<String, i64> = left;
        expected.extend(right);

        prop_assert_eq!(fields.len(), expected.len());
        for (key, value) in expected {
            prop_assert_eq!(fields.get(&key), Some(&FieldValue::Int(value)));
        }
    }
}

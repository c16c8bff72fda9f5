//! Property-based tests for logging_library using proptest

#![cfg(feature = "console")]

use logging_library::core::log_arg::join_args;
use logging_library::handlers::console::default_format;
use logging_library::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

const WEIGHTS: [u8; 6] = [5, 10, 20, 30, 40, 50];

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Verbose),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Name lookup and parsing agree for every level
    #[test]
    fn test_level_name_roundtrip(level in any_level()) {
        let name = LogLevel::name(level.weight()).unwrap();
        prop_assert_eq!(name, level.to_str());
        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
        prop_assert_eq!(LogLevel::try_from(level.weight()).unwrap(), level);
    }

    /// Any weight outside the scale is rejected with that weight
    #[test]
    fn test_unknown_weight_is_rejected(weight in any::<u8>().prop_filter("not a level", |w| !WEIGHTS.contains(w))) {
        let err = LogLevel::name(weight).unwrap_err();
        prop_assert!(matches!(err, LoggerError::UnrecognizedLevel(w) if w == weight));
    }

    /// Level ordering is the ordering of weights
    #[test]
    fn test_level_ordering_follows_weight(a in any_level(), b in any_level()) {
        prop_assert_eq!(a.cmp(&b), a.weight().cmp(&b.weight()));
    }

    /// Levels serialize as their weight
    #[test]
    fn test_level_json_is_weight(level in any_level()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(json, level.weight().to_string());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A threshold handler receives exactly the records at or above it
    #[test]
    fn test_threshold_filter(threshold in any_level(), levels in prop::collection::vec(any_level(), 0..20)) {
        let capture = Arc::new(TestHandler::new(threshold));
        let logger = Logger::builder().handler(capture.clone()).build();

        for level in &levels {
            logger.log(*level, "message").unwrap();
        }

        let expected: Vec<LogLevel> = levels.iter().copied().filter(|l| *l >= threshold).collect();
        let received: Vec<LogLevel> = capture.records().iter().map(|r| r.level()).collect();
        prop_assert_eq!(received, expected);
    }

    /// A set handler receives exactly the records whose level is a member
    #[test]
    fn test_set_filter(
        members in prop::collection::btree_set(any_level(), 0..6),
        levels in prop::collection::vec(any_level(), 0..20),
    ) {
        let capture = Arc::new(TestHandler::new(LevelFilter::Only(members.clone())));
        let logger = Logger::builder().handler(capture.clone()).build();

        for level in &levels {
            logger.log(*level, "message").unwrap();
        }

        let expected: Vec<LogLevel> = levels.iter().copied().filter(|l| members.contains(l)).collect();
        let received: Vec<LogLevel> = capture.records().iter().map(|r| r.level()).collect();
        prop_assert_eq!(received, expected);
    }
}

// ============================================================================
// Message Tests
// ============================================================================

proptest! {
    /// Text arguments are joined with exactly one space
    #[test]
    fn test_text_arguments_join_with_space(parts in prop::collection::vec(".*", 0..8)) {
        let args: Vec<LogArg> = parts.iter().map(LogArg::from).collect();
        prop_assert_eq!(join_args(&args), parts.join(" "));
    }

    /// Numbers render in their natural form
    #[test]
    fn test_numbers_render_naturally(a in any::<i64>(), b in any::<u64>()) {
        let args = [LogArg::from(a), LogArg::from(b)];
        prop_assert_eq!(join_args(&args), format!("{} {}", a, b));
    }

    /// The console default line is `LEVEL: [context] - message`
    #[test]
    fn test_default_console_line(level in any_level(), context in ".*", message in ".*") {
        let record = LogRecord::new(&[message.clone().into()], RecordOptions::new(level, context.clone()));
        prop_assert_eq!(
            default_format(&record),
            format!("{}: [{}] - {}", level.to_str(), context, message)
        );
    }
}

// ============================================================================
// Record Serialization Tests
// ============================================================================

proptest! {
    /// JSON rendering never fails and keeps every field
    #[test]
    fn test_record_json_keeps_fields(
        level in any_level(),
        context in ".*",
        message in ".*",
        value in any::<i64>(),
    ) {
        let options = RecordOptions::new(level, context.clone())
            .with_metadata(Metadata::from([("value", value)]));
        let record = LogRecord::new(&[message.clone().into()], options);

        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        prop_assert_eq!(&json["level"], &serde_json::json!(level.weight()));
        prop_assert_eq!(&json["levelName"], level.to_str());
        prop_assert_eq!(&json["context"], context.as_str());
        prop_assert_eq!(&json["message"], message.as_str());
        prop_assert_eq!(&json["metadata"]["value"], &serde_json::json!(value));
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// Merging is last-write-wins per key and never drops a key
    #[test]
    fn test_metadata_merge(
        first in prop::collection::btree_map("[a-d]", any::<i32>(), 0..4),
        second in prop::collection::btree_map("[a-d]", any::<i32>(), 0..4),
    ) {
        let mut logger = Logger::new();
        logger.add_metadata(first.clone().into_iter().collect::<Metadata>());
        logger.add_metadata(second.clone().into_iter().collect::<Metadata>());

        let merged = logger.metadata();
        for key in first.keys().chain(second.keys()) {
            let expected = second.get(key).or_else(|| first.get(key)).unwrap();
            prop_assert_eq!(merged.get(key), Some(&serde_json::json!(expected)));
        }
        let distinct: std::collections::BTreeSet<&String> = first.keys().chain(second.keys()).collect();
        prop_assert_eq!(merged.len(), distinct.len());
    }

    /// Scoping never changes the parent
    #[test]
    fn test_with_context_leaves_parent_untouched(context in ".*", handlers in 0usize..5) {
        let mut parent = Logger::with_name("Parent");
        for _ in 0..handlers {
            parent.add_handler(Arc::new(TestHandler::default()));
        }

        let mut child = parent.with_context(context.clone());
        child.add_metadata([("child", true)]);

        prop_assert_eq!(child.context(), context.as_str());
        prop_assert_eq!(child.handler_count(), handlers);
        prop_assert_eq!(parent.context(), "Parent");
        prop_assert!(parent.metadata().is_empty());
    }
}

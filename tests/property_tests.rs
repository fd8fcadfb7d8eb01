//! Property-based tests for rust_service_logger using proptest

use proptest::prelude::*;
use rust_service_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::DPanic),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

fn capture(minimum: LogLevel) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder("prop")
        .min_level(minimum)
        .writer(buffer.clone())
        .build();
    (logger, buffer)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Ordering follows the integer discriminants
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as i8;
        let val2 = level2 as i8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(should_emit(level1, level2), val1 >= val2);
    }

    /// Resolution ignores case for every name in the table
    #[test]
    fn test_resolve_case_insensitive(
        name in prop::sample::select(vec!["debug", "info", "warn", "error", "panic", "fatal"]),
        upper_mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mixed: String = name
            .chars()
            .zip(upper_mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();

        prop_assert_eq!(LogLevel::resolve(&mixed), LogLevel::resolve(name));
        prop_assert_eq!(LogLevel::resolve(name).as_str(), name);
    }

    /// Anything outside the table resolves to Info and never panics
    #[test]
    fn test_resolve_unknown_falls_back(name in "\\PC*") {
        let known = ["debug", "info", "warn", "error", "panic", "fatal"];
        prop_assume!(!known.contains(&name.to_ascii_lowercase().as_str()));
        prop_assert_eq!(LogLevel::resolve(&name), LogLevel::Info);
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// A record reaches the sink iff its level is at or above the minimum
    #[test]
    fn test_gate_matches_order(record in any_level(), minimum in any_level()) {
        let (logger, buffer) = capture(minimum);
        logger.log(record, "gated", &[]);

        prop_assert_eq!(!buffer.is_empty(), record >= minimum);
    }

    /// Accumulated fields appear once each, in attachment order
    #[test]
    fn test_fields_preserve_order(values in prop::collection::vec(any::<i64>(), 1..20)) {
        let (root, buffer) = capture(LogLevel::Info);
        let logger = values
            .iter()
            .enumerate()
            .fold(root.clone(), |logger, (i, value)| logger.with_field(field(format!("k{}", i), *value)));
        logger.info("ordered", &[]);

        let line = &buffer.lines()[0];
        let mut last = 0;
        for (i, value) in values.iter().enumerate() {
            let needle = format!("\"k{}\":{}", i, value);
            let pos = line.find(&needle);
            prop_assert!(pos.is_some(), "missing {} in {}", needle, line);
            let pos = pos.unwrap();
            prop_assert!(pos >= last);
            last = pos;
        }
        prop_assert!(root.fields().is_empty());
    }

    /// Arbitrary messages and string fields always produce one valid JSON line
    #[test]
    fn test_any_text_is_one_json_line(message in "\\PC*", key in "[a-z]{1,8}", value in ".*") {
        let (logger, buffer) = capture(LogLevel::Debug);
        logger.warn(&message, &[field(key.clone(), value.clone())]);

        let lines = buffer.lines();
        prop_assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        prop_assert_eq!(parsed["msg"].as_str(), Some(message.as_str()));
        if !["level", "logger", "caller", "msg", "timestamp"].contains(&key.as_str()) {
            prop_assert_eq!(parsed[key.as_str()].as_str(), Some(value.as_str()));
        }
    }
}

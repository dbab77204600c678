//! Diagnostics tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the debug event emitted for each committed entry.
//! - Test the override warning emitted for repeated keys.
//! - Test that lenient skips are reported as warnings.

use tracing::Level;

use super::load;
use crate::test_util::{at_level, capture_events};

#[test]
fn test_debug_event_per_committed_entry() {
    let (result, events) = capture_events(|| load("A=INT=1\nB=hello"));
    result.unwrap();

    let sets: Vec<_> = at_level(&events, Level::DEBUG)
        .into_iter()
        .filter(|e| e.message.contains("Setting environment variable"))
        .collect();
    assert_eq!(sets.len(), 2, "got: {events:?}");
    assert_eq!(sets[0].field("key"), Some("A"));
    assert_eq!(sets[0].field("type_tag"), Some("INT"));
    assert_eq!(sets[0].field("value"), Some("1"));
    assert_eq!(sets[1].field("type_tag"), Some("STR"));
}

#[test]
fn test_override_warning_emitted_once_for_case_variants() {
    let (result, events) = capture_events(|| load("a=1\nA=2"));
    let (config, _) = result.unwrap();

    let overrides: Vec<_> = at_level(&events, Level::WARN)
        .into_iter()
        .filter(|e| e.message.contains("is this intentional"))
        .collect();
    assert_eq!(overrides.len(), 1, "got: {events:?}");
    assert_eq!(overrides[0].field("key"), Some("A"));
    assert_eq!(config.get("A").as_str(), Some("2"));
}

#[test]
fn test_lenient_skip_is_reported() {
    let (result, events) = capture_events(|| load("\nA=INT=notanumber"));
    result.unwrap();

    let skips: Vec<_> = at_level(&events, Level::WARN)
        .into_iter()
        .filter(|e| e.message.contains("could not be coerced"))
        .collect();
    assert_eq!(skips.len(), 1, "got: {events:?}");
    assert_eq!(skips[0].field("key"), Some("A"));
    assert_eq!(skips[0].field("line"), Some("2"));
    assert!(
        skips[0].field("error").is_some_and(|e| e.contains("notanumber")),
        "got: {skips:?}"
    );
}

#[test]
fn test_clean_load_emits_no_warnings() {
    let (result, events) = capture_events(|| load("A=1\nB=INT=2\nC=BOOL=TRUE"));
    result.unwrap();
    assert!(at_level(&events, Level::WARN).is_empty(), "got: {events:?}");
}

//! Tests for filter module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// FilterName Tests
// ============================================================================

#[test_case(FilterName::Status, "status")]
#[test_case(FilterName::TriggeredBy, "triggered_by")]
#[test_case(FilterName::Namespace, "namespace")]
fn test_filter_name_as_str(name: FilterName, expected: &str) {
    assert_eq!(name.as_str(), expected);
    assert_eq!(name.to_string(), expected);
}

#[test]
fn test_filter_name_from_str() {
    assert_eq!("status".parse::<FilterName>().unwrap(), FilterName::Status);
    assert_eq!(
        "triggered_by".parse::<FilterName>().unwrap(),
        FilterName::TriggeredBy
    );
    assert_eq!(
        "namespace".parse::<FilterName>().unwrap(),
        FilterName::Namespace
    );

    let err = "color".parse::<FilterName>().unwrap_err();
    assert_eq!(err, Error::unknown_filter("color"));
}

#[test]
fn test_filter_name_round_trips_through_str() {
    for name in FilterName::ALL {
        assert_eq!(name.as_str().parse::<FilterName>().unwrap(), name);
    }
}

// ============================================================================
// FilterSet Tests
// ============================================================================

#[test]
fn test_filter_set_starts_empty() {
    let filters = FilterSet::new();
    assert!(filters.is_empty());
    assert_eq!(filters.len(), 0);
    assert_eq!(filters.get(FilterName::Status), None);
}

#[test]
fn test_filter_set_set_and_get() {
    let mut filters = FilterSet::new();
    filters.set(FilterName::Status, Some("failed".to_string()));

    assert_eq!(filters.get(FilterName::Status), Some("failed"));
    assert!(filters.is_set(FilterName::Status));
    assert!(!filters.is_set(FilterName::Namespace));
    assert_eq!(filters.len(), 1);
}

#[test]
fn test_filter_set_none_clears() {
    let mut filters = FilterSet::new();
    filters.set(FilterName::Status, Some("pending".to_string()));
    filters.set(FilterName::Status, None);

    assert!(filters.is_empty());
    assert_eq!(filters.get(FilterName::Status), None);
}

#[test]
fn test_filter_set_clear_leaves_others() {
    let mut filters = FilterSet::new();
    filters.set(FilterName::Status, Some("failed".to_string()));
    filters.set(FilterName::Namespace, Some("default".to_string()));

    filters.clear(FilterName::Status);

    assert_eq!(filters.get(FilterName::Status), None);
    assert_eq!(filters.get(FilterName::Namespace), Some("default"));
}

#[test]
fn test_filter_set_overwrites_selection() {
    let mut filters = FilterSet::new();
    filters.set(FilterName::TriggeredBy, Some("node-drain".to_string()));
    filters.set(FilterName::TriggeredBy, Some("job-register".to_string()));

    assert_eq!(filters.get(FilterName::TriggeredBy), Some("job-register"));
    assert_eq!(filters.len(), 1);
}

#[test]
fn test_filter_set_to_query_params() {
    let mut filters = FilterSet::new();
    filters.set(FilterName::Status, Some("complete".to_string()));
    filters.set(FilterName::Namespace, Some("prod".to_string()));

    let params = filters.to_query_params();
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("status"), Some(&"complete".to_string()));
    assert_eq!(params.get("namespace"), Some(&"prod".to_string()));
    assert_eq!(params.get("triggered_by"), None);
}

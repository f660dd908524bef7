//! Tests for the combination registry: validation, copy isolation, removal
//! and output serialization.
mod common;
use common::*;
use fieldgen::prelude::*;

#[test]
fn test_commit_then_get_returns_deep_equal_map() {
    let mut registry = CombinationRegistry::new();
    let map = field_map(&[("type", &["a", "b"])]);

    registry.commit("ab", &map).unwrap();
    assert_eq!(registry.get("ab"), Some(&map));
}

#[test]
fn test_committed_entry_is_isolated_from_later_mutation() {
    let mut registry = CombinationRegistry::new();
    let mut map = field_map(&[("type", &["a", "b"])]);
    registry.commit("ab", &map).unwrap();

    // Mutating the caller's map must not change the stored copy.
    map.get_mut("type").unwrap().push("c".to_string());
    map.insert("condition".to_string(), strings(&["A"]));

    let stored = registry.get("ab").unwrap();
    assert_eq!(stored, &field_map(&[("type", &["a", "b"])]));
}

#[test]
fn test_remove_then_get_returns_none() {
    let mut registry = CombinationRegistry::new();
    registry
        .commit("ab", &field_map(&[("type", &["a"])]))
        .unwrap();

    registry.remove("ab");
    assert_eq!(registry.get("ab"), None);
}

#[test]
fn test_remove_of_never_committed_name_is_a_no_op() {
    let mut registry = CombinationRegistry::new();
    registry
        .commit("ab", &field_map(&[("type", &["a"])]))
        .unwrap();

    registry.remove("never-committed");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("ab"), Some(&field_map(&[("type", &["a"])])));
}

#[test]
fn test_commit_with_empty_name_fails_and_leaves_registry_unchanged() {
    let mut registry = CombinationRegistry::new();
    let err = registry
        .commit("", &field_map(&[("type", &["a"])]))
        .unwrap_err();

    assert_eq!(err, CommitError::EmptyName);
    assert!(registry.is_empty());
}

#[test]
fn test_commit_with_empty_map_fails_and_leaves_registry_unchanged() {
    let mut registry = CombinationRegistry::new();
    let err = registry.commit("ab", &FieldMap::new()).unwrap_err();

    assert_eq!(err, CommitError::EmptyFieldMap);
    assert!(registry.is_empty());
}

#[test]
fn test_recommit_overwrites_and_keeps_name_position() {
    let mut registry = CombinationRegistry::new();
    registry
        .commit("first", &field_map(&[("type", &["a"])]))
        .unwrap();
    registry
        .commit("second", &field_map(&[("type", &["b"])]))
        .unwrap();
    registry
        .commit("first", &field_map(&[("type", &["c"])]))
        .unwrap();

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(registry.get("first"), Some(&field_map(&[("type", &["c"])])));
}

#[test]
fn test_remove_preserves_order_of_remaining_names() {
    let mut registry = CombinationRegistry::new();
    for name in ["one", "two", "three"] {
        registry
            .commit(name, &field_map(&[("type", &["a"])]))
            .unwrap();
    }

    registry.remove("two");
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["one", "three"]);
}

#[test]
fn test_output_document_shape() {
    let mut registry = CombinationRegistry::new();
    registry
        .commit("ab", &field_map(&[("type", &["a", "b"])]))
        .unwrap();
    // A single selected value still renders as a JSON array.
    registry
        .commit("just-a", &field_map(&[("type", &["a"])]))
        .unwrap();

    let json = registry.to_json().unwrap();
    assert_eq!(json, r#"{"ab":{"type":["a","b"]},"just-a":{"type":["a"]}}"#);
}

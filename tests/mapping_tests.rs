//! Unit tests for the `Mapping` pipeline container.

#![cfg(feature = "pipeline")]

use enumars::pipeline::{Mapping, Sequence};
use rstest::rstest;

// =============================================================================
// Construction and Lookup
// =============================================================================

#[rstest]
fn collects_pairs_in_insertion_order() {
    let mapping: Mapping<&str, i32> = vec![("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(mapping.keys(), vec!["b", "a"]);
    assert_eq!(mapping.values(), vec![2, 1]);
}

#[rstest]
fn later_duplicates_overwrite_keeping_position() {
    let mapping = Mapping::from(vec![("a", 1), ("b", 2), ("a", 9)]);
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get(&"a"), Some(&9));
    assert_eq!(mapping.keys(), vec!["a", "b"]);
}

#[rstest]
fn get_and_contains_key() {
    let mapping = Mapping::from(vec![("a", 1)]);
    assert_eq!(mapping.get(&"a"), Some(&1));
    assert_eq!(mapping.get(&"missing"), None);
    assert!(mapping.contains_key(&"a"));
    assert!(!mapping.contains_key(&"missing"));
}

// =============================================================================
// Persistent Updates
// =============================================================================

#[rstest]
fn put_returns_a_new_mapping() {
    let original = Mapping::from(vec![("a", 1)]);
    let updated = original.put("b", 2);

    assert_eq!(original.len(), 1);
    assert_eq!(updated.len(), 2);
    assert_eq!(updated.get(&"b"), Some(&2));
}

#[rstest]
fn put_replaces_in_place() {
    let mapping = Mapping::from(vec![("a", 1), ("b", 2)]).put("a", 9);
    assert_eq!(mapping.get(&"a"), Some(&9));
    assert_eq!(mapping.keys(), vec!["a", "b"]);
}

#[rstest]
fn delete_removes_only_the_named_key() {
    let mapping = Mapping::from(vec![("a", 1), ("b", 2)]).delete(&"a");
    assert_eq!(mapping.get(&"a"), None);
    assert_eq!(mapping.get(&"b"), Some(&2));
}

#[rstest]
fn merge_overwrites_with_the_right_hand_side() {
    let base = Mapping::from(vec![("a", 1), ("b", 2)]);
    let merged = base.merge(&Mapping::from(vec![("b", 9), ("c", 3)]));

    assert_eq!(merged.get(&"a"), Some(&1));
    assert_eq!(merged.get(&"b"), Some(&9));
    assert_eq!(merged.get(&"c"), Some(&3));
    assert_eq!(merged.keys(), vec!["a", "b", "c"]);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_values_preserves_keys_and_order() {
    let doubled = Mapping::from(vec![("a", 1), ("b", 2)]).map_values(|value| value * 2);
    assert_eq!(doubled.keys(), vec!["a", "b"]);
    assert_eq!(doubled.values(), vec![2, 4]);
}

#[rstest]
fn filter_and_reject_split_the_same_predicate() {
    let mapping = Mapping::from(vec![("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(mapping.filter(|_, value| value % 2 == 1).keys(), vec!["a", "c"]);
    assert_eq!(mapping.reject(|_, value| value % 2 == 1).keys(), vec!["b"]);
}

#[rstest]
fn to_sequence_feeds_back_into_the_pipeline() {
    let total: i32 = Mapping::from(vec![("a", 1), ("b", 2)])
        .to_sequence()
        .sum_by(|(_, value)| *value);
    assert_eq!(total, 3);
}

#[rstest]
fn sequence_and_mapping_round_trip() {
    let pairs = Sequence::from(vec![("a", 1), ("b", 2)]);
    let mapping: Mapping<&str, i32> = pairs.iter().cloned().collect();
    assert_eq!(mapping.to_sequence(), pairs);
}

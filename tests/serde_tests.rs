//! Serde round-trip tests for values, expression trees and containers.

#![cfg(all(feature = "serde", feature = "lambda", feature = "pipeline"))]

use enumars::lambda::{ARG, Expr, Value};
use enumars::pipeline::{Mapping, Sequence};
use rstest::rstest;

#[rstest]
fn value_round_trips_through_json() {
    for value in [Value::Int(-3), Value::Float(2.5), Value::Bool(true)] {
        let serialized = serde_json::to_string(&value).unwrap();
        let deserialized: Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, value);
    }
}

#[rstest]
fn expression_trees_survive_serialization() {
    let tree = ARG * 2 + 1;
    let serialized = serde_json::to_string(&tree).unwrap();
    let deserialized: Expr = serde_json::from_str(&serialized).unwrap();

    assert_eq!(deserialized, tree);
    assert_eq!(deserialized.apply(5).unwrap(), Value::Int(11));
}

#[rstest]
fn containers_survive_serialization() {
    let sequence = Sequence::from(vec![1, 2, 3]);
    let serialized = serde_json::to_string(&sequence).unwrap();
    let deserialized: Sequence<i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, sequence);

    let mapping = Mapping::from(vec![("a", 1), ("b", 2)]);
    let serialized = serde_json::to_string(&mapping).unwrap();
    let deserialized: Mapping<String, i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized.get(&"a".to_string()), Some(&1));
    assert_eq!(deserialized.keys(), vec!["a".to_string(), "b".to_string()]);
}

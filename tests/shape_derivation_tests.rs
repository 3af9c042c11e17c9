// Copyright 2025 Cowboy AI, LLC.

//! Shape-level derivation properties
//!
//! The derived union must carry exactly one variant per source key, keep
//! the uniform value type, and be insensitive to the order the source keys
//! were declared in.

use key_union::{ShapeError, SingleFieldShape, SourceShape, ValueType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn fruit_shape() -> SourceShape {
    SourceShape::from_keys(ValueType::Integer, ["apple", "pear", "banana"]).unwrap()
}

#[test]
fn derives_one_variant_per_key() {
    let union = fruit_shape().derive_union();

    assert_eq!(union.len(), 3);
    let keys: Vec<&str> = union.variants().map(SingleFieldShape::key).collect();
    assert_eq!(keys, vec!["apple", "pear", "banana"]);
}

#[test]
fn variant_set_matches_source_exactly() {
    let shape = fruit_shape();
    let union = shape.derive_union();

    assert_eq!(union.len(), shape.len());
    for key in shape.keys() {
        assert!(union.contains_key(key));
    }
    assert!(!union.contains_key("mango"));
}

#[test]
fn uniform_value_type_is_preserved() {
    let union = SourceShape::from_keys(ValueType::Number, ["x", "y"])
        .unwrap()
        .derive_union();

    assert_eq!(union.value_type(), ValueType::Number);
    for variant in union.variants() {
        assert_eq!(variant.value_type(), ValueType::Number);
    }
}

#[test]
fn empty_mapping_derives_empty_union() {
    let union = SourceShape::new(ValueType::Integer).derive_union();

    assert!(union.is_empty());
    assert_eq!(union.to_string(), "(empty union)");
}

#[test]
fn duplicate_key_is_rejected() {
    let err = SourceShape::new(ValueType::Integer)
        .with_key("apple")
        .unwrap()
        .with_key("apple")
        .unwrap_err();

    assert_eq!(
        err,
        ShapeError::DuplicateKey {
            key: "apple".to_string()
        }
    );
}

#[test]
fn empty_key_is_rejected() {
    let err = SourceShape::new(ValueType::Integer)
        .with_key("")
        .unwrap_err();

    assert_eq!(err, ShapeError::EmptyKey);
}

#[test]
fn display_names_the_expected_variant_shapes() {
    let union = fruit_shape().derive_union();

    assert_eq!(
        union.to_string(),
        "{ apple: integer } | { pear: integer } | { banana: integer }"
    );
}

proptest! {
    #[test]
    fn union_has_exactly_one_variant_per_key(
        keys in prop::collection::hash_set("[a-z][a-z0-9_]{0,8}", 1..16),
    ) {
        let shape = SourceShape::from_keys(ValueType::Number, keys.iter().cloned()).unwrap();
        let union = shape.derive_union();

        prop_assert_eq!(union.len(), keys.len());
        for key in &keys {
            prop_assert!(union.contains_key(key));
        }
        for variant in union.variants() {
            prop_assert!(keys.contains(variant.key()));
            prop_assert_eq!(variant.value_type(), ValueType::Number);
        }
    }

    #[test]
    fn key_order_does_not_change_the_union(
        keys in prop::collection::hash_set("[a-z][a-z0-9_]{0,8}", 1..16),
    ) {
        let forward: Vec<String> = keys.iter().cloned().collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = SourceShape::from_keys(ValueType::Integer, forward).unwrap();
        let b = SourceShape::from_keys(ValueType::Integer, reversed).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.derive_union(), b.derive_union());
    }
}

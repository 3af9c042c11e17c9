// Copyright 2025 Cowboy AI, LLC.

//! Deriving the single-key union of a source mapping

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::shape::{SingleFieldShape, SourceShape, ValueType};

/// The union derived from a source mapping: one single-field variant per key
///
/// A candidate document conforms to the union when it populates exactly one
/// of the variant keys with a value of the uniform value type. Variant order
/// follows the source mapping but does not affect equality.
#[derive(Debug, Clone)]
pub struct UnionShape {
    variants: IndexMap<String, SingleFieldShape>,
    value_type: ValueType,
}

impl SourceShape {
    /// Derives the single-key union of this mapping
    ///
    /// Each key becomes one [`SingleFieldShape`] variant carrying the
    /// mapping's uniform value type, so the variant set always matches the
    /// key set exactly. An empty mapping derives an empty union, to which no
    /// document conforms.
    pub fn derive_union(&self) -> UnionShape {
        let value_type = self.value_type();
        let variants: IndexMap<String, SingleFieldShape> = self
            .keys()
            .map(|key| (key.to_owned(), SingleFieldShape::new(key, value_type)))
            .collect();

        debug!(
            "derived {} single-key variants over {} values",
            variants.len(),
            value_type
        );

        UnionShape {
            variants,
            value_type,
        }
    }
}

impl UnionShape {
    /// Variants in derivation order
    pub fn variants(&self) -> impl Iterator<Item = &SingleFieldShape> {
        self.variants.values()
    }

    /// Whether `key` names one of the variants
    pub fn contains_key(&self, key: &str) -> bool {
        self.variants.contains_key(key)
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the union has no variants (nothing conforms)
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The value type shared by every variant
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// Variant order does not affect equality: a reordered source mapping
/// derives an equal union.
impl PartialEq for UnionShape {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type
            && self.variants.len() == other.variants.len()
            && self
                .variants
                .values()
                .all(|variant| other.variants.get(variant.key()) == Some(variant))
    }
}

impl Eq for UnionShape {}

/// Renders the alternatives the union admits, e.g.
/// `{ apple: integer } | { pear: integer } | { banana: integer }`.
impl fmt::Display for UnionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variants.is_empty() {
            return f.write_str("(empty union)");
        }
        for (i, variant) in self.variants.values().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", variant)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_shape() -> SourceShape {
        SourceShape::from_keys(ValueType::Integer, ["apple", "pear", "banana"]).unwrap()
    }

    #[test]
    fn test_one_variant_per_key() {
        let union = fruit_shape().derive_union();

        assert_eq!(union.len(), 3);
        let keys: Vec<&str> = union.variants().map(SingleFieldShape::key).collect();
        assert_eq!(keys, vec!["apple", "pear", "banana"]);
    }

    #[test]
    fn test_variant_value_type_matches_source() {
        let union = fruit_shape().derive_union();

        assert_eq!(union.value_type(), ValueType::Integer);
        for variant in union.variants() {
            assert_eq!(variant.value_type(), ValueType::Integer);
        }
    }

    #[test]
    fn test_variant_key_set_matches_source() {
        let shape = fruit_shape();
        let union = shape.derive_union();

        for key in shape.keys() {
            assert!(union.contains_key(key));
        }
        assert!(!union.contains_key("mango"));
    }

    #[test]
    fn test_empty_mapping_derives_empty_union() {
        let union = SourceShape::new(ValueType::Integer).derive_union();

        assert!(union.is_empty());
        assert_eq!(union.len(), 0);
        assert_eq!(union.to_string(), "(empty union)");
    }

    #[test]
    fn test_equality_ignores_variant_order() {
        let forward = fruit_shape().derive_union();
        let backward = SourceShape::from_keys(ValueType::Integer, ["banana", "pear", "apple"])
            .unwrap()
            .derive_union();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_display_names_expected_variant_shapes() {
        let union = fruit_shape().derive_union();

        assert_eq!(
            union.to_string(),
            "{ apple: integer } | { pear: integer } | { banana: integer }"
        );
    }
}

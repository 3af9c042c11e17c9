// Copyright 2025 Cowboy AI, LLC.

//! Shapes for source mappings and their single-field variants
//!
//! A [`SourceShape`] is the closed key set of a record whose fields all hold
//! one scalar value type. A [`SingleFieldShape`] is the shape of a value
//! populating exactly one of those keys. Deriving the full
//! [`UnionShape`](crate::UnionShape) of single-field shapes lives in the
//! neighboring module.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::errors::{ShapeError, ShapeResult};

/// Scalar classification of the value type shared by every key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole-number values (counts, indices)
    Integer,
    /// Floating-point values
    Number,
    /// Textual values
    Text,
    /// Boolean values
    Boolean,
}

impl ValueType {
    /// Name used in diagnostics and schema output
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Text => "text",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a Rust scalar type to its [`ValueType`] classification
///
/// Implemented for the scalar types a source mapping may hold. The
/// [`key_union!`](crate::key_union) macro uses this to reflect the uniform
/// value type of a generated record into its [`SourceShape`].
pub trait UniformValue {
    /// Classification of `Self` in shape terms
    const VALUE_TYPE: ValueType;
}

macro_rules! impl_uniform_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl UniformValue for $ty {
                const VALUE_TYPE: ValueType = ValueType::$kind;
            }
        )*
    };
}

impl_uniform_value! {
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    u64 => Integer,
    usize => Integer,
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    isize => Integer,
    f32 => Number,
    f64 => Number,
    bool => Boolean,
    String => Text,
}

/// A source mapping: a closed, ordered set of named keys that all hold the
/// same scalar value type
///
/// Built once and immutable afterwards; its purpose is to derive the
/// matching single-key union via [`derive_union`](SourceShape::derive_union).
/// Key order is preserved for display and schema output but does not affect
/// equality.
#[derive(Debug, Clone)]
pub struct SourceShape {
    keys: IndexSet<String>,
    value_type: ValueType,
}

impl SourceShape {
    /// Creates an empty source mapping over the given value type
    pub fn new(value_type: ValueType) -> Self {
        Self {
            keys: IndexSet::new(),
            value_type,
        }
    }

    /// Adds a key, consuming and returning the shape
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EmptyKey`] for an empty key and
    /// [`ShapeError::DuplicateKey`] if the key is already present.
    pub fn with_key(mut self, key: impl Into<String>) -> ShapeResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(ShapeError::EmptyKey);
        }
        if !self.keys.insert(key.clone()) {
            return Err(ShapeError::DuplicateKey { key });
        }
        Ok(self)
    }

    /// Builds a source mapping from an iterator of keys
    ///
    /// # Errors
    ///
    /// Fails on the first empty or duplicate key.
    pub fn from_keys<I, K>(value_type: ValueType, keys: I) -> ShapeResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        keys.into_iter()
            .try_fold(Self::new(value_type), |shape, key| shape.with_key(key))
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Whether `key` names a field of this mapping
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the mapping has no keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The value type shared by every key
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

/// Key order does not affect equality: `{apple, pear}` and `{pear, apple}`
/// describe the same mapping.
impl PartialEq for SourceShape {
    fn eq(&self, other: &Self) -> bool {
        self.value_type == other.value_type
            && self.keys.len() == other.keys.len()
            && self.keys.iter().all(|key| other.keys.contains(key))
    }
}

impl Eq for SourceShape {}

/// A shape with exactly one named field holding the uniform value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleFieldShape {
    key: String,
    value_type: ValueType,
}

impl SingleFieldShape {
    /// Creates the shape for one key
    pub fn new(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
        }
    }

    /// The single key this shape admits
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value type behind the key
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

impl fmt::Display for SingleFieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}: {} }}", self.key, self.value_type)
    }
}

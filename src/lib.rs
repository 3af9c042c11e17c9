// Copyright 2025 Cowboy AI, LLC.

//! # Key Union
//!
//! Building blocks for deriving a single-key union from a keyed record.
//!
//! A *source mapping* is a closed set of named keys that all hold the same
//! scalar value type, such as a count per fruit. This crate derives the
//! matching *single-key union*: a sum type with exactly one alternative per
//! key, each carrying the shared value type. A value belongs to the union
//! precisely when it populates exactly one of the keys.
//!
//! Two renditions are provided:
//! - **Shapes**: [`SourceShape`] and [`UnionShape`] describe a mapping and
//!   its derived union as plain data, compare key sets, and render to JSON
//!   Schema without any generated types
//! - **Types**: the [`key_union!`] macro defines the record struct and the
//!   derived enum in one invocation, so the variant set can never drift from
//!   the field set
//!
//! ## Design Principles
//!
//! 1. **Derived, not hand-written**: the union is computed from the key set,
//!    never maintained in parallel with it
//! 2. **Exactly one key**: a union value holds one key and one value; the
//!    zero-key and multi-key states are unrepresentable
//! 3. **Uniform value type**: every alternative carries the same scalar type
//!    as every other
//! 4. **Verdicts at the boundary**: generated `Deserialize` impls accept or
//!    reject candidate documents with diagnostics naming the expected keys
//!
//! ## Example
//!
//! ```
//! use key_union::key_union;
//!
//! key_union! {
//!     /// Count of each fruit on hand.
//!     pub struct FruitCounts: u64 {
//!         apple,
//!         pear,
//!         banana,
//!     }
//!     /// Exactly one fruit count at a time.
//!     pub enum SingleFruitCount;
//! }
//!
//! let single = SingleFruitCount::Banana(12);
//! assert_eq!(single.key(), "banana");
//!
//! let parsed: SingleFruitCount = serde_json::from_str(r#"{"banana":12}"#).unwrap();
//! assert_eq!(parsed, single);
//!
//! // Two populated keys never conform
//! assert!(serde_json::from_str::<SingleFruitCount>(r#"{"apple":1,"pear":2}"#).is_err());
//! ```

#![warn(missing_docs)]

mod derive;
mod errors;
mod macros;
pub mod schema;
mod shape;

// Re-export core types
pub use derive::UnionShape;
pub use errors::{ShapeError, ShapeResult};
pub use shape::{SingleFieldShape, SourceShape, UniformValue, ValueType};

/// Support items for the expansion of [`key_union!`]. Not a public API.
#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use schemars;
    pub use serde;

    use crate::{SourceShape, ValueType};

    /// Builds a [`SourceShape`] from the keys collected by [`key_union!`].
    ///
    /// The compiler has already enforced uniqueness on the generated struct
    /// fields, so construction cannot fail here.
    ///
    /// [`key_union!`]: crate::key_union
    pub fn source_shape(value_type: ValueType, keys: &[&str]) -> SourceShape {
        SourceShape::from_keys(value_type, keys.iter().copied())
            .expect("generated record fields are unique and non-empty")
    }
}

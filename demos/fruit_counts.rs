// Copyright 2025 Cowboy AI, LLC.

//! Walkthrough of deriving a single-key union from a keyed record
//!
//! This demo shows:
//! - Defining a record and its derived union in one `key_union!` invocation
//! - Decomposing the record into single-key values
//! - Conformance verdicts on candidate documents at the data boundary
//! - The shape-level derivation and its JSON Schema rendering

use key_union::key_union;

key_union! {
    /// Count of each fruit on hand.
    pub struct FruitCounts: u64 {
        apple,
        pear,
        banana,
    }
    /// Exactly one fruit count at a time.
    pub enum SingleFruitCount;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The source mapping: every key present, all counts
    let counts = FruitCounts {
        apple: 1,
        pear: 4,
        banana: 26,
    };
    println!("record: {}", serde_json::to_string(&counts)?);

    // A union value populates exactly one key
    let single = SingleFruitCount::Banana(12);
    println!("single: {}", serde_json::to_string(&single)?);

    // The record decomposes into one single-key value per field
    println!("split:");
    for part in counts.split() {
        println!("  {} = {}", part.key(), part.value());
    }

    // The same derivation at shape level, without the generated types
    let union = FruitCounts::shape().derive_union();
    println!("alternatives: {}", union);

    // Conformance verdicts on candidate documents
    let candidates = [
        r#"{"banana":12}"#,
        r#"{"apple":1,"pear":2}"#,
        r#"{}"#,
        r#"{"apple":"3"}"#,
        r#"{"mango":7}"#,
    ];
    for doc in candidates {
        match serde_json::from_str::<SingleFruitCount>(doc) {
            Ok(value) => println!("accepted {} -> key {}", doc, value.key()),
            Err(err) => println!("rejected {} -> {}", doc, err),
        }
    }

    // The union as a JSON Schema: oneOf over single-key objects
    let schema = schemars::schema_for!(SingleFruitCount);
    println!("schema:\n{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}

// JSON Schema rendering for source mappings and derived unions
//
// The union schema mirrors the shape of a type checker's expectation:
// a `oneOf` across single-property objects, each requiring its key and
// allowing no other properties.

use schemars::schema::{
    InstanceType, Metadata, ObjectValidation, Schema, SchemaObject, SubschemaValidation,
};

use crate::{ShapeResult, SourceShape, UnionShape, ValueType};

/// Schema for one scalar value type.
pub fn scalar(value_type: ValueType) -> Schema {
    let instance_type = match value_type {
        ValueType::Integer => InstanceType::Integer,
        ValueType::Number => InstanceType::Number,
        ValueType::Text => InstanceType::String,
        ValueType::Boolean => InstanceType::Boolean,
    };

    let mut schema = SchemaObject::default();
    schema.instance_type = Some(instance_type.into());
    Schema::Object(schema)
}

/// Schema for an object populating exactly `key` with `value_schema`.
pub fn single_key_object(key: &str, value_schema: Schema) -> Schema {
    let mut object = ObjectValidation::default();
    object.properties.insert(key.to_owned(), value_schema);
    object.required.insert(key.to_owned());
    object.additional_properties = Some(Box::new(Schema::Bool(false)));

    let mut schema = SchemaObject::default();
    schema.instance_type = Some(InstanceType::Object.into());
    schema.object = Some(Box::new(object));
    Schema::Object(schema)
}

/// `oneOf` schema across `keys`: each alternative is a single-key object.
pub fn union_of_keys(title: &str, keys: &[&str], value_schema: Schema) -> Schema {
    let alternatives: Vec<Schema> = keys
        .iter()
        .map(|key| single_key_object(key, value_schema.clone()))
        .collect();

    let mut schema = SchemaObject::default();
    schema.metadata = Some(Box::new(Metadata {
        title: Some(title.to_owned()),
        description: Some(format!(
            "An object populating exactly one of the keys {:?}",
            keys
        )),
        ..Default::default()
    }));
    schema.subschemas = Some(Box::new(SubschemaValidation {
        one_of: Some(alternatives),
        ..Default::default()
    }));
    Schema::Object(schema)
}

/// Schema for the record populating every key with `value_schema`.
pub fn record_of_keys(title: &str, keys: &[&str], value_schema: Schema) -> Schema {
    let mut object = ObjectValidation::default();
    for key in keys {
        object
            .properties
            .insert((*key).to_owned(), value_schema.clone());
        object.required.insert((*key).to_owned());
    }
    object.additional_properties = Some(Box::new(Schema::Bool(false)));

    let mut schema = SchemaObject::default();
    schema.instance_type = Some(InstanceType::Object.into());
    schema.metadata = Some(Box::new(Metadata {
        title: Some(title.to_owned()),
        ..Default::default()
    }));
    schema.object = Some(Box::new(object));
    Schema::Object(schema)
}

impl SourceShape {
    /// JSON Schema for documents shaped like this mapping (every key present)
    pub fn to_json_schema(&self, title: &str) -> Schema {
        let keys: Vec<&str> = self.keys().collect();
        record_of_keys(title, &keys, scalar(self.value_type()))
    }
}

impl UnionShape {
    /// JSON Schema for documents conforming to this union
    pub fn to_json_schema(&self, title: &str) -> Schema {
        let keys: Vec<&str> = self.variants().map(|variant| variant.key()).collect();
        union_of_keys(title, &keys, scalar(self.value_type()))
    }

    /// The union schema as a plain JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Schema`](crate::ShapeError::Schema) if the
    /// schema fails to serialize.
    pub fn to_json(&self, title: &str) -> ShapeResult<serde_json::Value> {
        Ok(serde_json::to_value(self.to_json_schema(title))?)
    }
}

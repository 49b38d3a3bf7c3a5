//! Schema definitions for per-component value validation
//!
//! A schema is the validation contract a registry entry may declare for a
//! component. Validation is opt-in: components without a schema accept
//! any value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Expected structure of a component's configuration value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Fields the schema constrains; fields not listed here are ignored
    /// unless the validator is configured to deny unknown fields
    #[serde(default)]
    pub fields: HashMap<String, SchemaField>,

    /// Schema description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A field in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Whether this field must be present
    #[serde(default)]
    pub required: bool,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Field type enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Null type
    Null,

    /// Boolean type
    Boolean,

    /// Number type (int or float)
    Number,

    /// String type
    String,

    /// Array type
    Array {
        /// Type of array elements
        items: Box<FieldType>,
    },

    /// Object type
    Object {
        /// Schema for the object (optional)
        schema: Option<Box<Schema>>,
    },

    /// Any type (no validation)
    Any,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field
    pub fn add_field(mut self, name: impl Into<String>, field: SchemaField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }

    /// Check if a field is required
    pub fn is_required(&self, name: &str) -> bool {
        self.fields.get(name).map(|f| f.required).unwrap_or(false)
    }
}

impl SchemaField {
    /// Create a new optional field
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            description: None,
        }
    }

    /// Mark field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl FieldType {
    /// Create an array type
    pub fn array(items: FieldType) -> Self {
        FieldType::Array {
            items: Box::new(items),
        }
    }

    /// Create an object type without a nested schema
    pub fn object() -> Self {
        FieldType::Object { schema: None }
    }

    /// Create an object type with a nested schema
    pub fn object_with_schema(schema: Schema) -> Self {
        FieldType::Object {
            schema: Some(Box::new(schema)),
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Null => "null",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
            FieldType::Any => "any",
        }
    }
}

//! Value validation against schemas
//!
//! The validator reports every violation in a submission, not just the
//! first, and returns them sorted by path so callers (and tests) see a
//! stable order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::schema::{FieldType, Schema};
use super::value::Value;

/// A single schema violation: where in the value it occurred and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path within the value, e.g. `banner.links[2]`; `$` for the
    /// value root
    pub path: String,
    /// Human-readable message
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validator for values against schemas
#[derive(Debug, Clone)]
pub struct Validator {
    /// Whether fields absent from the schema fail validation. Off by
    /// default: documents carry partial configs and schemas only
    /// constrain the fields they declare.
    deny_unknown_fields: bool,
}

impl Validator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            deny_unknown_fields: false,
        }
    }

    /// Reject fields the schema does not declare
    pub fn deny_unknown_fields(mut self) -> Self {
        self.deny_unknown_fields = true;
        self
    }

    /// Validate a value against a schema.
    ///
    /// Returns every violation found, sorted by (path, message).
    pub fn validate(&self, value: &Value, schema: &Schema) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        match value {
            Value::Object(_) => {
                self.validate_object("", value, schema, &mut violations);
            }
            other => {
                violations.push(Violation::new(
                    "$",
                    format!("expected object, got {}", other.type_name()),
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            violations.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.message.cmp(&b.message)));
            Err(violations)
        }
    }

    fn validate_object(
        &self,
        prefix: &str,
        value: &Value,
        schema: &Schema,
        violations: &mut Vec<Violation>,
    ) {
        let obj = match value {
            Value::Object(obj) => obj,
            _ => return,
        };

        for (field_name, field) in &schema.fields {
            if field.required && !obj.contains_key(field_name) {
                violations.push(Violation::new(
                    join_path(prefix, field_name),
                    "required field is missing",
                ));
            }
        }

        for (field_name, field_value) in obj {
            let path = join_path(prefix, field_name);
            match schema.get_field(field_name) {
                Some(schema_field) => {
                    self.validate_field(&path, field_value, &schema_field.field_type, violations);
                }
                None => {
                    if self.deny_unknown_fields {
                        violations.push(Violation::new(path, "unknown field"));
                    }
                }
            }
        }
    }

    fn validate_field(
        &self,
        path: &str,
        value: &Value,
        field_type: &FieldType,
        violations: &mut Vec<Violation>,
    ) {
        match field_type {
            FieldType::Any => {}

            FieldType::Null | FieldType::Boolean | FieldType::Number | FieldType::String => {
                let matches = matches!(
                    (field_type, value),
                    (FieldType::Null, Value::Null)
                        | (FieldType::Boolean, Value::Bool(_))
                        | (FieldType::Number, Value::Number(_))
                        | (FieldType::String, Value::String(_))
                );
                if !matches {
                    violations.push(type_mismatch(path, field_type, value));
                }
            }

            FieldType::Array { items } => {
                if let Value::Array(elements) = value {
                    for (index, element) in elements.iter().enumerate() {
                        self.validate_field(
                            &format!("{}[{}]", path, index),
                            element,
                            items,
                            violations,
                        );
                    }
                } else {
                    violations.push(type_mismatch(path, field_type, value));
                }
            }

            FieldType::Object { schema } => {
                if !value.is_object() {
                    violations.push(type_mismatch(path, field_type, value));
                } else if let Some(nested) = schema {
                    self.validate_object(path, value, nested, violations);
                }
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn type_mismatch(path: &str, expected: &FieldType, actual: &Value) -> Violation {
    Violation::new(
        path,
        format!(
            "expected {}, got {}",
            expected.type_name(),
            actual.type_name()
        ),
    )
}

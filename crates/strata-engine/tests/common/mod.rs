//! Common test utilities for engine integration tests

use strata_core::Value;

/// Build a `Value` from a JSON literal
pub fn value(json: serde_json::Value) -> Value {
    serde_json::from_value(json).expect("JSON literal converts to Value")
}

/// Field lookup that panics with context when the path is absent
pub fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value
        .get(key)
        .unwrap_or_else(|| panic!("missing field '{}' in {:?}", key, value))
}

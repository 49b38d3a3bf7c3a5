//! Deep merge for layered configuration values
//!
//! Objects merge field by field; arrays and scalars are replaced wholesale
//! by the overlay. A null overlay preserves the base, so a layer can omit
//! or null a field without clobbering what less specific layers set.

use super::value::Value;

/// Merge `overlay` onto `base`, returning the combined value.
///
/// `base` is `None` when the overlaid key does not exist in the base
/// object. The result contains every key of the base object, with keys
/// present in both merged recursively and keys only in the overlay added.
pub fn deep_merge(base: Option<&Value>, overlay: &Value) -> Value {
    match overlay {
        Value::Null => base.cloned().unwrap_or(Value::Null),
        Value::Object(overlay_map) => match base {
            Some(Value::Object(base_map)) => {
                let mut out = base_map.clone();
                for (key, overlay_value) in overlay_map {
                    let merged = deep_merge(base_map.get(key), overlay_value);
                    out.insert(key.clone(), merged);
                }
                Value::Object(out)
            }
            _ => overlay.clone(),
        },
        _ => overlay.clone(),
    }
}

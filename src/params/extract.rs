// ABOUTME: Value extraction - unwraps parameters that arrive as value-holder
// ABOUTME: objects (`{"value": x}`) so every parameter is a plain scalar.

use serde_json::{Map, Value};

/// Field under which a wrapped parameter carries its scalar.
pub const WRAPPED_VALUE_FIELD: &str = "value";

/// Unwrap a single parameter value, one level deep.
pub fn unwrap_value(value: Value) -> Value {
    match value {
        Value::Object(mut obj) if obj.contains_key(WRAPPED_VALUE_FIELD) => obj
            .remove(WRAPPED_VALUE_FIELD)
            .unwrap_or(Value::Null),
        other => other,
    }
}

/// Normalize a raw parameter bag. Keys are preserved; wrapped values are
/// replaced by their scalar, everything else passes through unchanged.
pub fn normalize(raw: Map<String, Value>) -> Map<String, Value> {
    raw.into_iter()
        .map(|(key, value)| (key, unwrap_value(value)))
        .collect()
}

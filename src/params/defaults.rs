// ABOUTME: Default resolution - fills omitted optional parameters from the
// ABOUTME: schema without touching caller-supplied or required fields.

use serde_json::{Map, Value};

use super::ParameterSchema;

/// Fill every optional parameter that is absent or null with its default.
///
/// Explicit values, including empty strings, always win. Required fields are
/// never invented here; their absence is reported by validation.
pub fn apply_defaults(mut params: Map<String, Value>, schema: &ParameterSchema) -> Map<String, Value> {
    for param in schema.params() {
        let Some(default) = &param.default else {
            continue;
        };
        let missing = params.get(param.name).is_none_or(Value::is_null);
        if missing {
            tracing::debug!(field = param.name, "applying default");
            params.insert(param.name.to_string(), default.clone());
        }
    }
    params
}

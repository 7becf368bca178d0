/// Utility functions
use serde_json::Value;

/// Read a display string from a JSON object, falling back to `default`.
///
/// Strings are returned verbatim, other scalars as their JSON text. Missing
/// keys, `null` values and non-object payloads yield the default.
pub fn text_or(v: &Value, key: &str, default: &str) -> String {
    match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(other) => other.to_string(),
    }
}

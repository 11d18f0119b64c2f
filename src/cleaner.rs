//! Deep clean of upstream payloads and selection of the returned result.

use serde_json::{Map, Value};

/// Keys removed from every level of an upstream payload, compared lowercase.
const STRIPPED_KEYS: [&str; 2] = ["credit", "cached"];

/// Returns true if `key` must be dropped from a cleaned tree.
pub fn is_stripped_key(key: &str) -> bool {
    let lowered = key.to_lowercase();
    STRIPPED_KEYS.contains(&lowered.as_str())
}

/// Returns a copy of `value` with every stripped key removed at any depth.
///
/// Object values under kept keys and array elements are cleaned recursively;
/// scalars are returned unchanged. The input is never mutated.
pub fn deep_clean(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !is_stripped_key(key))
                .map(|(key, inner)| (key.clone(), deep_clean(inner)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(deep_clean).collect()),
        scalar => scalar.clone(),
    }
}

/// Loose truthiness: `null`, `false`, zero and `""` are falsy.
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Picks the payload returned to the caller from a cleaned tree.
///
/// Priority: a truthy `result` field, then a truthy `data` field, then the
/// whole tree.
pub fn select_result(cleaned: &Value) -> Value {
    ["result", "data"]
        .iter()
        .filter_map(|field| cleaned.get(*field))
        .find(|candidate| is_truthy(candidate))
        .unwrap_or(cleaned)
        .clone()
}

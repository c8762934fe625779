//! Container shape checks.
//!
//! Rust containers already know whether they are lists or maps, so the check
//! works on JSON values: arrays are lists, objects are keyed. An object whose
//! keys are exactly `"0"`, `"1"`, ... in order is still treated as a list.

use serde_json::Value;

/// Whether `value` is a keyed container rather than a dense list.
///
/// Arrays are never associative. Objects are associative unless their keys
/// form the sequence `"0".."n-1"` in iteration order; an empty object counts
/// as associative. Scalars are not containers and yield `false`.
pub fn is_associative(value: &Value) -> bool {
    match value {
        Value::Array(_) => false,
        Value::Object(map) => is_associative_keys(map.keys().map(String::as_str)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

/// Whether `keys` are anything other than `"0".."n-1"` in order.
///
/// An empty key sequence is associative.
pub fn is_associative_keys<'key, I>(keys: I) -> bool
where
    I: IntoIterator<Item = &'key str>,
{
    let mut empty = true;
    for (expected, key) in keys.into_iter().enumerate() {
        if key != expected.to_string() {
            return true;
        }
        empty = false;
    }
    empty
}

//! Canonical JSON serialization.

use crate::error::CanonicalError;
use serde::Serialize;
use serde_json::Value;

/// Serialize any serializable value to canonical JSON.
///
/// # Errors
///
/// Returns `CanonicalError` if the value cannot be converted to a JSON tree
/// (e.g. a map with non-string keys).
///
/// # Example
///
/// ```rust
/// use ofd_sign::to_canonical_json;
///
/// let canonical = to_canonical_json(&serde_json::json!({"z": 1, "a": 2})).unwrap();
/// assert_eq!(canonical, r#"{"a":2,"z":1}"#);
/// ```
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let tree = serde_json::to_value(value)?;
    Ok(canonical_string(&tree))
}

/// Serialize a JSON tree to its canonical form.
///
/// Infallible: every `serde_json::Value` has a canonical rendering.
pub fn canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            // Keys sorted lexicographically by UTF-8 bytes.
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                if let Some(item) = map.get(*key) {
                    write_value(out, item);
                }
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            // Raw UTF-8, including Cyrillic receipt text.
            c => out.push(c),
        }
    }
    out.push('"');
}

//! Parameter normalization.
//!
//! The service treats absent and empty values differently: a null leaf in a
//! parameter mapping is rewritten to an empty string before serialization,
//! failing closed toward "empty" rather than "absent". Signatures are
//! computed over the normalized form, so `{"a": null}` and `{"a": ""}` sign
//! identically.

use serde_json::Value;

/// Rewrite every null leaf of `params` to an empty string.
///
/// Objects and arrays are walked recursively; all other values are returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use ofd_core::normalize_params;
/// use serde_json::json;
///
/// let params = json!({"a": null, "b": {"c": null, "d": 1}});
/// assert_eq!(normalize_params(&params), json!({"a": "", "b": {"c": "", "d": 1}}));
/// ```
pub fn normalize_params(params: &Value) -> Value {
    match params {
        Value::Null => Value::String(String::new()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize_params(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(normalize_params).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_null_leaf_becomes_empty_string() {
        assert_eq!(normalize_params(&json!({"a": null})), json!({"a": ""}));
    }

    #[test]
    fn test_nested_nulls_rewritten() {
        let params = json!({"find": {"field": null, "value": 194350}, "date": null});
        assert_eq!(
            normalize_params(&params),
            json!({"find": {"field": "", "value": 194350}, "date": ""})
        );
    }

    #[test]
    fn test_nulls_inside_arrays_rewritten() {
        let params = json!({"items": [null, 1, {"x": null}]});
        assert_eq!(normalize_params(&params), json!({"items": ["", 1, {"x": ""}]}));
    }

    #[test]
    fn test_non_null_values_untouched() {
        let params = json!({"s": "text", "n": 7, "b": false, "f": 8.95});
        assert_eq!(normalize_params(&params), params);
    }

    #[test]
    fn test_bare_null() {
        assert_eq!(normalize_params(&Value::Null), json!(""));
    }
}

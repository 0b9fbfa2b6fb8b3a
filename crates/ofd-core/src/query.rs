//! Query-string encoding for GET requests.
//!
//! Nested parameter mappings are flattened with bracket notation
//! (`find[field]=...`, numeric indexes for arrays) and form-urlencoded, the
//! wire format the service expects for query parameters. Booleans encode as
//! `1`/`0` and null leaves as empty values, matching body normalization.

use serde_json::Value;
use url::form_urlencoded;

/// Encode a parameter mapping as a query string, without the leading `?`.
///
/// Returns an empty string for an empty mapping. Values that are themselves
/// objects or arrays are flattened into bracketed keys.
///
/// # Example
///
/// ```rust
/// use ofd_core::encode_query;
/// use serde_json::json;
///
/// let query = encode_query(&json!({"app_id": "a-1", "nonce": "salt_1"}));
/// assert_eq!(query, "app_id=a-1&nonce=salt_1");
/// ```
pub fn encode_query(params: &Value) -> String {
    let mut pairs = Vec::new();
    collect_pairs("", params, &mut pairs);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn collect_pairs(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}[{key}]")
                };
                collect_pairs(&path, item, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_pairs(&format!("{prefix}[{index}]"), item, pairs);
            }
        }
        leaf => {
            // A leaf at the top level has no key to attach to; skip it.
            if !prefix.is_empty() {
                pairs.push((prefix.to_string(), leaf_to_string(leaf)));
            }
        }
    }
}

fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Unreachable: objects and arrays are flattened by the caller.
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flat_mapping() {
        let query = encode_query(&json!({"app_id": "d78c", "nonce": "salt_9"}));
        assert_eq!(query, "app_id=d78c&nonce=salt_9");
    }

    #[test]
    fn test_nested_mapping_uses_brackets() {
        let query = encode_query(&json!({"find": {"field": "fiscalDocumentNumber"}}));
        assert_eq!(query, "find%5Bfield%5D=fiscalDocumentNumber");
    }

    #[test]
    fn test_arrays_use_numeric_indexes() {
        let query = encode_query(&json!({"ids": [3, 7]}));
        assert_eq!(query, "ids%5B0%5D=3&ids%5B1%5D=7");
    }

    #[test]
    fn test_bools_encode_as_digits() {
        let query = encode_query(&json!({"report_type": false, "full": true}));
        assert_eq!(query, "report_type=0&full=1");
    }

    #[test]
    fn test_null_leaf_encodes_empty() {
        let query = encode_query(&json!({"value": null}));
        assert_eq!(query, "value=");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = encode_query(&json!({"author": "Иванов И."}));
        assert_eq!(
            query,
            "author=%D0%98%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2+%D0%98."
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(encode_query(&json!({})), "");
    }
}

//! Response classification and payload decoding.

use crate::error::ClientError;
use serde_json::{Map, Value};

/// What a status code means for the request lifecycle.
///
/// # Status code mapping
///
/// - 200 -> `Success` (body decoded as a JSON object)
/// - 401 -> `ExpiredToken` (re-sent exactly once)
/// - 503 -> `RateLimited` (surfaced, never retried)
/// - 500 -> `ServerError`
/// - anything else -> `Other(status)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Success,
    ExpiredToken,
    RateLimited,
    ServerError,
    Other(u16),
}

/// Classify a status code.
pub fn classify(status: u16) -> Disposition {
    match status {
        200 => Disposition::Success,
        401 => Disposition::ExpiredToken,
        503 => Disposition::RateLimited,
        500 => Disposition::ServerError,
        other => Disposition::Other(other),
    }
}

/// Decode a 200 body into a JSON object.
///
/// The facade contract promises a mapping, so valid JSON that is not an
/// object is a decode error too.
pub fn decode_payload(body: &str) -> Result<Map<String, Value>, ClientError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| ClientError::Decode(err.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::Decode(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(classify(200), Disposition::Success);
        assert_eq!(classify(401), Disposition::ExpiredToken);
        assert_eq!(classify(503), Disposition::RateLimited);
        assert_eq!(classify(500), Disposition::ServerError);
        assert_eq!(classify(404), Disposition::Other(404));
        assert_eq!(classify(202), Disposition::Other(202));
    }

    #[test]
    fn test_decode_object() {
        let payload = decode_payload(r#"{"result":[{"id":1}]}"#).unwrap();
        let result = payload["result"].as_array().expect("result array");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["id"], 1);
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_payload("{not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_decode_non_object_body() {
        let err = decode_payload("[1,2,3]").unwrap_err();
        match err {
            ClientError::Decode(message) => assert!(message.contains("an array")),
            other => panic!("wrong error: {other:?}"),
        }
    }
}

//! Response store and JSON assertions.

use ofd_client::{ClientError, OfdClient};
use ofd_core::Method;
use serde_json::Value;

/// Wraps a client, keeping the last response for step-by-step assertions.
///
/// Successful requests store the decoded payload; failed ones store the
/// client's structured error body, so scenarios can assert on either.
/// Assertion helpers panic with a readable message, which is what a failing
/// scenario step should do.
pub struct ApiHarness {
    client: OfdClient,
    last: Option<Value>,
}

impl ApiHarness {
    pub fn new(client: OfdClient) -> Self {
        Self { client, last: None }
    }

    /// Execute a request and record its outcome.
    pub async fn request(
        &mut self,
        method: Method,
        model: &str,
        params: Value,
    ) -> Result<(), ClientError> {
        match self.client.request(method, model, params).await {
            Ok(payload) => {
                self.last = Some(Value::Object(payload));
                Ok(())
            }
            Err(err) => {
                self.last = Some(err.error_body());
                Err(err)
            }
        }
    }

    /// The last recorded response, if any request has run.
    pub fn last_response(&self) -> Option<&Value> {
        self.last.as_ref()
    }

    /// Extract part of the last response by JSON Pointer (`/result/0/id`).
    pub fn grab_by_pointer(&self, pointer: &str) -> Option<&Value> {
        self.last.as_ref().and_then(|value| value.pointer(pointer))
    }

    /// Assert the serialized response contains a text fragment.
    #[track_caller]
    pub fn assert_response_contains(&self, text: &str) {
        let rendered = self.response().to_string();
        assert!(
            rendered.contains(text),
            "response does not contain {text:?}: {rendered}"
        );
    }

    /// Assert the response contains `subset` (recursive containment: every
    /// expected key must be present and match; arrays match per element).
    #[track_caller]
    pub fn assert_response_contains_json(&self, subset: &Value) {
        let response = self.response();
        assert!(
            json_contains(response, subset),
            "response does not contain {subset}: {response}"
        );
    }

    /// Assert the response equals `expected` exactly.
    #[track_caller]
    pub fn assert_response_equals(&self, expected: &Value) {
        assert_eq!(self.response(), expected);
    }

    /// Assert the `status` field of the response.
    #[track_caller]
    pub fn assert_status(&self, expected: &str) {
        let response = self.response();
        let status = response
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("response has no string `status` field: {response}"));
        assert_eq!(status, expected, "unexpected status in {response}");
    }

    #[track_caller]
    fn response(&self) -> &Value {
        self.last
            .as_ref()
            .expect("no response recorded yet; run a request first")
    }
}

/// Recursive JSON containment: `expected` object keys must all be present
/// and match, array elements must each be contained somewhere in the actual
/// array, scalars must be equal.
pub fn json_contains(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => expected.iter().all(|(key, value)| {
            actual
                .get(key)
                .map_or(false, |item| json_contains(item, value))
        }),
        (Value::Array(actual), Value::Array(expected)) => expected
            .iter()
            .all(|value| actual.iter().any(|item| json_contains(item, value))),
        _ => actual == expected,
    }
}

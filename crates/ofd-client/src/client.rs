//! The client facade.

use crate::error::ClientError;
use crate::response::{classify, decode_payload, Disposition};
use crate::transport::{ReqwestTransport, Transport};
use ofd_core::{
    encode_query, normalize_params, ApiRequest, ClientConfig, Credentials, HttpRequest, Method,
    RawResponse,
};
use ofd_sign::{canonical_string, sign_params, NonceGenerator};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Client for the OFD API and the open-api variant.
///
/// One configurable facade replaces the service's historical zoo of
/// near-identical clients: base URL, credentials and transport are all
/// injected. Requests are dispatched one at a time; the only recovery the
/// client performs itself is a single re-send after a 401.
///
/// # Example
///
/// ```ignore
/// use ofd_client::OfdClient;
/// use ofd_core::{ClientConfig, Credentials, Method};
///
/// let config = ClientConfig::new(
///     "https://check-dev.business.ru/open-api/v1/",
///     Credentials::AppSecret {
///         app_id: "app-1".into(),
///         secret_key: "secret".into(),
///     },
/// );
/// let client = OfdClient::new(config)?;
/// let status = client.request(Method::Get, "StateSystem", serde_json::json!({})).await?;
/// ```
pub struct OfdClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    nonces: NonceGenerator,
}

impl OfdClient {
    /// Create a client with the reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.connect_timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport (tests, instrumentation).
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            nonces: NonceGenerator::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request against a model endpoint.
    ///
    /// Returns the decoded JSON object on 200. A 401 is re-sent exactly
    /// once; every other non-200 maps to a [`ClientError`] carrying the
    /// status (`error_code() == "http:<code>"`).
    ///
    /// # Errors
    ///
    /// See [`ClientError`] for the full taxonomy.
    pub async fn request(
        &self,
        method: Method,
        model: &str,
        params: Value,
    ) -> Result<Map<String, Value>, ClientError> {
        let request = self.build_request(method, model, params)?;
        let wire = self.render(&request);

        tracing::debug!(model, method = %request.method, nonce = %request.nonce, "dispatching");
        let mut response = self.transport.send(&wire).await?;

        if classify(response.status) == Disposition::ExpiredToken {
            // Bounded single-shot retry: the identical request, once.
            tracing::warn!(model, "401 from service, re-sending once");
            response = self.transport.send(&wire).await?;
        }

        self.conclude(model, response)
    }

    /// Daily receipt and strict-reporting documents by fiscal drive number.
    pub async fn documents(&self, params: Value) -> Result<Map<String, Value>, ClientError> {
        self.request(Method::Post, "documents", params).await
    }

    fn conclude(
        &self,
        model: &str,
        response: RawResponse,
    ) -> Result<Map<String, Value>, ClientError> {
        match classify(response.status) {
            Disposition::Success => {
                tracing::info!(model, "request succeeded");
                decode_payload(&response.body)
            }
            // Only reachable after the retry also came back 401.
            Disposition::ExpiredToken => {
                tracing::error!(model, "401 after retry, giving up");
                Err(ClientError::AuthExpired)
            }
            Disposition::RateLimited => {
                tracing::error!(model, "503, service rate limited");
                Err(ClientError::RateLimited)
            }
            Disposition::ServerError => {
                tracing::error!(model, body = %response.body, "500 internal server error");
                Err(ClientError::Server {
                    body: response.body,
                })
            }
            Disposition::Other(status) => {
                tracing::error!(model, status, "unexpected HTTP status");
                Err(ClientError::Http { status })
            }
        }
    }

    fn build_request(
        &self,
        method: Method,
        model: &str,
        params: Value,
    ) -> Result<ApiRequest, ClientError> {
        let mut params = normalize_params(&params);
        let nonce = self.nonces.next();

        let sign = match &self.config.credentials {
            Credentials::AppSecret { secret_key, .. } => {
                // The open-api carries the nonce inside the signed mapping.
                if let Value::Object(map) = &mut params {
                    map.entry("nonce")
                        .or_insert_with(|| Value::String(nonce.clone()));
                }
                Some(sign_params(&params, secret_key)?)
            }
            Credentials::ApiToken(_) => None,
        };

        Ok(ApiRequest {
            method,
            model: model.to_string(),
            params,
            nonce,
            sign,
        })
    }

    fn render(&self, request: &ApiRequest) -> HttpRequest {
        let mut url = self.config.endpoint(&request.model);
        let mut headers = Vec::new();
        let mut body = None;

        match &self.config.credentials {
            Credentials::ApiToken(token) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                headers.push(("Ofdapitoken".to_string(), token.clone()));
            }
            Credentials::AppSecret { .. } => {
                headers.push((
                    "Content-Type".to_string(),
                    "application/json; charset=utf-8".to_string(),
                ));
                headers.push(("accept".to_string(), "application/json".to_string()));
                if let Some(sign) = &request.sign {
                    headers.push(("sign".to_string(), sign.clone()));
                }
            }
        }

        if request.method.is_query() {
            let query = encode_query(&request.params);
            if !query.is_empty() {
                url = format!("{url}?{query}");
            }
        } else {
            // The body is the same canonical form the signature covers.
            body = Some(canonical_string(&request.params));
        }

        HttpRequest {
            method: request.method,
            url,
            headers,
            body,
        }
    }
}

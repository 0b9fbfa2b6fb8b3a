//! Pluggable HTTP transport.
//!
//! The facade never talks to reqwest directly: it renders an
//! [`HttpRequest`](ofd_core::HttpRequest) and hands it to a [`Transport`].
//! Tests swap in scripted transports; production uses [`ReqwestTransport`].

use async_trait::async_trait;
use ofd_core::{HttpRequest, Method, RawResponse};
use std::time::Duration;
use thiserror::Error;

/// Network-level failures. HTTP error statuses are not transport errors;
/// they come back as a [`RawResponse`] for the classifier.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("transport failure: {0}")]
    Io(String),
}

/// A synchronous-per-call HTTP transport: one request, one raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given connect timeout. No overall request
    /// timeout is set; callers impose their own deadlines.
    pub fn new(connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|err| TransportError::Io(err.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_connect() {
                TransportError::Connect(err.to_string())
            } else {
                TransportError::Io(err.to_string())
            }
        })?;

        // 4xx/5xx are data for the classifier, not transport failures.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Io(err.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

//! Open-api command layer: session token and cash-register commands.

use crate::client::OfdClient;
use crate::error::ClientError;
use ofd_core::{ConfigError, Credentials, Method};
use serde_json::{json, Map, Value};

/// Token issuing endpoint. Always queried with GET.
pub const TOKEN_MODEL: &str = "Token";

/// Command endpoint for cash-register ("ККТ") operations.
pub const COMMAND_MODEL: &str = "Command";

/// System state endpoint.
pub const STATE_SYSTEM_MODEL: &str = "StateSystem";

/// A connected open-api session: an [`OfdClient`] with app-secret
/// credentials plus the short-lived integration token every command carries.
///
/// # Example
///
/// ```ignore
/// use ofd_client::{OfdClient, OpenApiClient};
/// use ofd_core::{ClientConfig, Credentials, OPEN_API_TEST_BASE_URL};
///
/// let config = ClientConfig::new(OPEN_API_TEST_BASE_URL, Credentials::AppSecret {
///     app_id: cfg.app_id,
///     secret_key: cfg.secret_key,
/// });
/// let mut session = OpenApiClient::connect(OfdClient::new(config)?).await?;
/// session.open_shift("Кассир Иванов").await?;
/// ```
pub struct OpenApiClient {
    client: OfdClient,
    app_id: String,
    token: String,
}

impl std::fmt::Debug for OpenApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenApiClient")
            .field("app_id", &self.app_id)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl OpenApiClient {
    /// Fetch a session token and return a connected command client.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError::AppSecretRequired`] when the underlying
    /// client holds token credentials, and with `Decode` when the token
    /// endpoint answers without a `token` field.
    pub async fn connect(client: OfdClient) -> Result<Self, ClientError> {
        let app_id = match &client.config().credentials {
            Credentials::AppSecret { app_id, .. } => app_id.clone(),
            Credentials::ApiToken(_) => {
                return Err(ClientError::Config(ConfigError::AppSecretRequired))
            }
        };

        let token = fetch_token(&client, &app_id).await?;
        Ok(Self {
            client,
            app_id,
            token,
        })
    }

    /// The current session token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Replace the session token with a freshly issued one.
    pub async fn refresh_token(&mut self) -> Result<(), ClientError> {
        self.token = fetch_token(&self.client, &self.app_id).await?;
        Ok(())
    }

    /// Open a shift on the cash register.
    pub async fn open_shift(&self, author: &str) -> Result<Map<String, Value>, ClientError> {
        self.shift_command("openShift", author).await
    }

    /// Close the current shift on the cash register.
    pub async fn close_shift(&self, author: &str) -> Result<Map<String, Value>, ClientError> {
        self.shift_command("closeShift", author).await
    }

    async fn shift_command(
        &self,
        kind: &str,
        author: &str,
    ) -> Result<Map<String, Value>, ClientError> {
        self.client
            .request(
                Method::Post,
                COMMAND_MODEL,
                json!({
                    "app_id": self.app_id,
                    "token": self.token,
                    "type": kind,
                    "command": {
                        "report_type": false,
                        "author": author,
                    },
                }),
            )
            .await
    }

    /// Print an income check. The check payload travels under `command`.
    pub async fn print_check(&self, check: Value) -> Result<Map<String, Value>, ClientError> {
        self.client
            .request(
                Method::Post,
                COMMAND_MODEL,
                json!({
                    "app_id": self.app_id,
                    "command": check,
                    "token": self.token,
                    "type": "printCheck",
                }),
            )
            .await
    }

    /// Print a purchase-return check. The wire format merges the session
    /// fields into the check payload itself, unlike [`print_check`].
    ///
    /// [`print_check`]: OpenApiClient::print_check
    pub async fn print_purchase_return(
        &self,
        check: Value,
    ) -> Result<Map<String, Value>, ClientError> {
        let mut params = match check {
            Value::Object(map) => map,
            other => {
                return Err(ClientError::Decode(format!(
                    "purchase-return payload must be a JSON object, got {other}"
                )))
            }
        };
        params.insert("app_id".to_string(), Value::String(self.app_id.clone()));
        params.insert("token".to_string(), Value::String(self.token.clone()));
        params.insert(
            "type".to_string(),
            Value::String("printPurchaseReturn".to_string()),
        );

        self.client
            .request(Method::Post, COMMAND_MODEL, Value::Object(params))
            .await
    }

    /// Current state of the fiscal system.
    pub async fn system_status(&self) -> Result<Map<String, Value>, ClientError> {
        self.client
            .request(
                Method::Get,
                STATE_SYSTEM_MODEL,
                json!({
                    "app_id": self.app_id,
                    "token": self.token,
                }),
            )
            .await
    }

    /// Look up an issued command by its id.
    pub async fn command_by_id(
        &self,
        command_id: &str,
    ) -> Result<Map<String, Value>, ClientError> {
        self.client
            .request(
                Method::Get,
                &format!("{COMMAND_MODEL}/{command_id}"),
                json!({
                    "app_id": self.app_id,
                    "token": self.token,
                }),
            )
            .await
    }
}

async fn fetch_token(client: &OfdClient, app_id: &str) -> Result<String, ClientError> {
    let payload = client
        .request(Method::Get, TOKEN_MODEL, json!({ "app_id": app_id }))
        .await?;
    payload
        .get("token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::Decode("token endpoint returned no `token` field".to_string()))
}

// ABOUTME: Registration service client - posts the assembled payload with
// ABOUTME: the deployment credential and classifies the HTTP outcome.

use async_trait::async_trait;

use super::RegistrationPayload;
use crate::error::RegistrationError;

/// Where the credential travels on the outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPlacement {
    /// `?<name>=<token>` on the endpoint URL.
    Query { name: String },
    /// `<name>: <token>` request header.
    Header { name: String },
}

impl Default for CredentialPlacement {
    fn default() -> Self {
        CredentialPlacement::Query {
            name: "authtoken".to_string(),
        }
    }
}

/// Connection settings for the registration service.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub endpoint: String,
    pub token: String,
    pub credential: CredentialPlacement,
}

impl RegistrationConfig {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            credential: CredentialPlacement::default(),
        }
    }

    pub fn credential(mut self, credential: CredentialPlacement) -> Self {
        self.credential = credential;
        self
    }
}

impl std::fmt::Debug for RegistrationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("credential", &self.credential)
            .finish()
    }
}

/// Something that can submit a registration.
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Submit the payload and return the service's response body untouched.
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<serde_json::Value, RegistrationError>;
}

/// HTTP client for the registration service.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    config: RegistrationConfig,
    http: reqwest::Client,
}

impl RegistrationClient {
    /// Create a client with default transport settings.
    pub fn new(config: RegistrationConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create with a custom reqwest client.
    pub fn with_client(config: RegistrationConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }
}

#[async_trait]
impl Registrar for RegistrationClient {
    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<serde_json::Value, RegistrationError> {
        let mut request = self
            .http
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(payload);

        request = match &self.config.credential {
            CredentialPlacement::Query { name } => {
                request.query(&[(name.as_str(), self.config.token.as_str())])
            }
            CredentialPlacement::Header { name } => {
                request.header(name.as_str(), self.config.token.as_str())
            }
        };

        tracing::info!(endpoint = %self.config.endpoint, "submitting registration");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "registration service rejected call");
            return Err(RegistrationError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let result: serde_json::Value = serde_json::from_slice(&body)?;
        tracing::info!(status = status.as_u16(), "registration accepted");
        Ok(result)
    }
}

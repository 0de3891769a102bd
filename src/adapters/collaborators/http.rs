//! Shared JSON-over-HTTP plumbing for the collaborator clients.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::error;

use crate::ports::CollaboratorError;

/// Configuration for one collaborator endpoint.
#[derive(Debug, Clone)]
pub struct HttpCollaboratorConfig {
    /// Base URL, e.g. `http://nlp-vectorizer:8000`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpCollaboratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A named JSON endpoint client.
#[derive(Debug, Clone)]
pub(crate) struct JsonClient {
    name: &'static str,
    base_url: String,
    client: Client,
}

impl JsonClient {
    pub(crate) fn new(
        name: &'static str,
        config: &HttpCollaboratorConfig,
    ) -> Result<Self, CollaboratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CollaboratorError::transport(name, e.to_string()))?;

        Ok(Self {
            name,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POSTs `body` to `path` and decodes the JSON answer.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, CollaboratorError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(collaborator = self.name, error = %e, "Collaborator request failed");
                CollaboratorError::transport(self.name, e.to_string())
            })?;

        let response = self.check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| CollaboratorError::invalid_response(self.name, e.to_string()))
    }

    async fn check_status(&self, response: Response) -> Result<Response, CollaboratorError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            collaborator = self.name,
            status = status.as_u16(),
            body = %body,
            "Collaborator returned an error status"
        );
        Err(CollaboratorError::unavailable(self.name, status.as_u16(), body))
    }
}

//! HTTP client for the text-embedding service.
//!
//! `POST /vectorize {"text": ...}` answers `{"vector": [...]}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{HttpCollaboratorConfig, JsonClient};
use crate::ports::{CollaboratorError, TextVectorizer};

const SERVICE_NAME: &str = "nlp-vectorizer";

pub struct HttpTextVectorizer {
    client: JsonClient,
}

impl HttpTextVectorizer {
    pub fn new(config: &HttpCollaboratorConfig) -> Result<Self, CollaboratorError> {
        Ok(Self {
            client: JsonClient::new(SERVICE_NAME, config)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct VectorizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct VectorizeResponse {
    vector: Vec<f64>,
}

#[async_trait]
impl TextVectorizer for HttpTextVectorizer {
    async fn vectorize(&self, text: &str) -> Result<Vec<f64>, CollaboratorError> {
        let response: VectorizeResponse = self
            .client
            .post("/vectorize", &VectorizeRequest { text })
            .await?;
        debug!(dimensions = response.vector.len(), "Text vectorized");
        Ok(response.vector)
    }
}

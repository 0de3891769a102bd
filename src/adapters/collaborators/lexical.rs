//! HTTP client for the lexical search service.
//!
//! `POST /searchServices {"text", "language", "top_k"}` answers
//! `{"services": [{"id", "score", "text"}]}`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{HttpCollaboratorConfig, JsonClient};
use crate::domain::service::Language;
use crate::ports::{CollaboratorError, LexicalHit, LexicalSearch};

const SERVICE_NAME: &str = "lexical-text-search";

pub struct HttpLexicalSearch {
    client: JsonClient,
}

impl HttpLexicalSearch {
    pub fn new(config: &HttpCollaboratorConfig) -> Result<Self, CollaboratorError> {
        Ok(Self {
            client: JsonClient::new(SERVICE_NAME, config)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    text: &'a str,
    language: Language,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    services: Vec<LexicalHit>,
}

#[async_trait]
impl LexicalSearch for HttpLexicalSearch {
    async fn search(
        &self,
        text: &str,
        language: Language,
        top_k: usize,
    ) -> Result<Vec<LexicalHit>, CollaboratorError> {
        let response: SearchResponse = self
            .client
            .post(
                "/searchServices",
                &SearchRequest {
                    text,
                    language,
                    top_k,
                },
            )
            .await?;
        debug!(hits = response.services.len(), %language, "Lexical search answered");
        Ok(response.services)
    }
}

//! Lexical Search Port - BM25 search service contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::CollaboratorError;
use crate::domain::foundation::ServiceId;
use crate::domain::service::Language;

/// One scored service returned by the lexical search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalHit {
    pub id: ServiceId,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LexicalHit {
    pub fn new(id: ServiceId, score: f64) -> Self {
        Self {
            id,
            score,
            text: None,
        }
    }
}

/// Port for the lexical search collaborator.
#[async_trait]
pub trait LexicalSearch: Send + Sync {
    /// Scores services against `text` in `language`.
    ///
    /// `top_k = 0` asks for every service in the corpus.
    async fn search(
        &self,
        text: &str,
        language: Language,
        top_k: usize,
    ) -> Result<Vec<LexicalHit>, CollaboratorError>;
}

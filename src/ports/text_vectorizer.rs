//! Text Vectorizer Port - embedding service contract.
//!
//! The embedding service turns free text into a pre-normalized vector, so a
//! dot product against stored vectors is the cosine similarity.

use async_trait::async_trait;

use super::CollaboratorError;

/// Port for the text-embedding collaborator.
#[async_trait]
pub trait TextVectorizer: Send + Sync {
    /// Embeds `text`.
    ///
    /// # Errors
    ///
    /// Any non-success response or transport failure.
    async fn vectorize(&self, text: &str) -> Result<Vec<f64>, CollaboratorError>;
}

//! Scoring collaborator endpoints

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::collaborators::HttpCollaboratorConfig;

/// Base URLs of the embedding and lexical search services
#[derive(Debug, Clone, Deserialize)]
pub struct CollaboratorsConfig {
    /// Embedding service, serves `POST /vectorize`
    pub vectorizer_url: String,

    /// Lexical search service, serves `POST /searchServices`
    pub lexical_search_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl CollaboratorsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn vectorizer(&self) -> HttpCollaboratorConfig {
        HttpCollaboratorConfig::new(&self.vectorizer_url).with_timeout(self.timeout())
    }

    pub fn lexical_search(&self) -> HttpCollaboratorConfig {
        HttpCollaboratorConfig::new(&self.lexical_search_url).with_timeout(self.timeout())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_url(&self.vectorizer_url, "COLLABORATORS__VECTORIZER_URL")?;
        check_url(&self.lexical_search_url, "COLLABORATORS__LEXICAL_SEARCH_URL")?;
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidCollaboratorTimeout);
        }
        Ok(())
    }
}

fn check_url(url: &str, key: &'static str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::MissingRequired(key));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidCollaboratorUrl(key));
    }
    Ok(())
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vectorizer_url: &str, lexical_search_url: &str) -> CollaboratorsConfig {
        CollaboratorsConfig {
            vectorizer_url: vectorizer_url.to_string(),
            lexical_search_url: lexical_search_url.to_string(),
            timeout_secs: default_timeout(),
        }
    }

    #[test]
    fn accepts_http_and_https() {
        let config = config("http://nlp-vectorizer:8000", "https://lexical.example.fi");
        assert!(config.validate().is_ok());
        assert_eq!(config.vectorizer().timeout, Duration::from_secs(30));
        assert_eq!(config.lexical_search().base_url, "https://lexical.example.fi");
    }

    #[test]
    fn rejects_missing_or_non_http_urls() {
        assert_eq!(
            config("", "http://lexical:8000").validate(),
            Err(ValidationError::MissingRequired("COLLABORATORS__VECTORIZER_URL"))
        );
        assert_eq!(
            config("http://nlp:8000", "ftp://lexical").validate(),
            Err(ValidationError::InvalidCollaboratorUrl(
                "COLLABORATORS__LEXICAL_SEARCH_URL"
            ))
        );
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = CollaboratorsConfig {
            timeout_secs: 0,
            ..config("http://nlp:8000", "http://lexical:8000")
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCollaboratorTimeout));
    }
}

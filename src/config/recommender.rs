//! Recommender defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::RecommenderSettings;
use crate::domain::recommendation::TextRecommender;
use crate::domain::service::Language;

/// Scoring defaults applied when a request leaves an option unset
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default)]
    pub score_threshold: f64,

    #[serde(default)]
    pub strategy: TextRecommender,

    #[serde(default)]
    pub language: Language,
}

impl RecommenderConfig {
    pub fn settings(&self) -> RecommenderSettings {
        RecommenderSettings {
            top_k: self.top_k,
            score_threshold: self.score_threshold,
            strategy: self.strategy,
            language: self.language,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }
        if !self.score_threshold.is_finite() {
            return Err(ValidationError::InvalidScoreThreshold);
        }
        Ok(())
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            score_threshold: 0.0,
            strategy: TextRecommender::default(),
            language: Language::default(),
        }
    }
}

fn default_top_k() -> usize {
    20
}

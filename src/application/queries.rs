//! Query objects accepted by the service matcher.
//!
//! Scoring options left unset fall back to the configured
//! [`RecommenderSettings`].

use serde::{Deserialize, Serialize};

use crate::domain::recommendation::{Priorization, RecommendationMode, TextRecommender};
use crate::domain::service::Language;

/// Defaults for scoring options a query leaves unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderSettings {
    pub top_k: usize,
    pub score_threshold: f64,
    pub strategy: TextRecommender,
    pub language: Language,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            top_k: 20,
            score_threshold: 0.0,
            strategy: TextRecommender::All,
            language: Language::Fi,
        }
    }
}

impl RecommenderSettings {
    /// Settings with every option the query sets overriding the default.
    pub fn apply(&self, options: &ScoringOptions) -> RecommenderSettings {
        RecommenderSettings {
            top_k: options.top_k.unwrap_or(self.top_k),
            score_threshold: options.score_threshold.unwrap_or(self.score_threshold),
            strategy: options.text_recommender.unwrap_or(self.strategy),
            language: options.language.unwrap_or(self.language),
        }
    }
}

/// Facet values by name or code, as supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetNames {
    /// Municipality names in any language.
    #[serde(default)]
    pub municipalities: Vec<String>,
    #[serde(default)]
    pub life_events: Vec<String>,
    #[serde(default)]
    pub service_classes: Vec<String>,
}

impl FacetNames {
    pub fn with_municipalities(mut self, municipalities: Vec<String>) -> Self {
        self.municipalities = municipalities;
        self
    }

    pub fn with_service_classes(mut self, service_classes: Vec<String>) -> Self {
        self.service_classes = service_classes;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    #[serde(default)]
    pub top_k: Option<usize>,
    #[serde(default)]
    pub score_threshold: Option<f64>,
    #[serde(default)]
    pub text_recommender: Option<TextRecommender>,
    #[serde(default)]
    pub language: Option<Language>,
}

/// Filtered catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceQuery {
    #[serde(flatten)]
    pub facets: FacetNames,
    #[serde(default)]
    pub priorization: Option<Priorization>,
    #[serde(default)]
    pub limit_k: Option<usize>,
    #[serde(default)]
    pub translate_missing_texts: bool,
}

/// Free-text recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecommendQuery {
    pub need_text: String,
    #[serde(flatten)]
    pub facets: FacetNames,
    #[serde(flatten)]
    pub scoring: ScoringOptions,
    #[serde(default)]
    pub translate_missing_texts: bool,
}

impl ServiceRecommendQuery {
    pub fn new(need_text: impl Into<String>) -> Self {
        Self {
            need_text: need_text.into(),
            ..Self::default()
        }
    }
}

/// Recommendation driven by a stored conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecommendQuery {
    #[serde(default)]
    pub mode: RecommendationMode,
    #[serde(flatten)]
    pub facets: FacetNames,
    #[serde(flatten)]
    pub scoring: ScoringOptions,
    #[serde(default)]
    pub translate_missing_texts: bool,
}

impl ConversationRecommendQuery {
    pub fn with_mode(mode: RecommendationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Services mapped to an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentQuery {
    pub intent: String,
    #[serde(flatten)]
    pub facets: FacetNames,
    #[serde(default)]
    pub translate_missing_texts: bool,
}

impl IntentQuery {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }
}

/// Services mapped to an intent, topped up by text or class matches.
///
/// `need_text`, `service_classes` and `priorization` override the options
/// stored with the intent mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentAndOptionsQuery {
    pub intent: String,
    #[serde(flatten)]
    pub facets: FacetNames,
    #[serde(default)]
    pub need_text: Option<String>,
    #[serde(flatten)]
    pub scoring: ScoringOptions,
    #[serde(default)]
    pub priorization: Option<Priorization>,
    #[serde(default)]
    pub limit_k: Option<usize>,
    #[serde(default)]
    pub translate_missing_texts: bool,
}

impl IntentAndOptionsQuery {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClassRecommendQuery {
    pub need_text: String,
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClassConversationQuery {
    #[serde(default)]
    pub top_k: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_options_use_settings() {
        let settings = RecommenderSettings::default();
        let applied = settings.apply(&ScoringOptions {
            top_k: Some(5),
            ..ScoringOptions::default()
        });
        assert_eq!(applied.top_k, 5);
        assert_eq!(applied.strategy, TextRecommender::All);
        assert_eq!(applied.language, Language::Fi);
        assert_eq!(applied.score_threshold, 0.0);
    }

    #[test]
    fn recommend_query_reads_flat_json() {
        let query: ServiceRecommendQuery = serde_json::from_value(json!({
            "need_text": "Jotain",
            "municipalities": ["Turku"],
            "text_recommender": "nlp",
            "language": "sv",
            "top_k": 3
        }))
        .unwrap();
        assert_eq!(query.facets.municipalities, vec!["Turku"]);
        assert_eq!(query.scoring.text_recommender, Some(TextRecommender::Nlp));
        assert_eq!(query.scoring.language, Some(Language::Sv));
        assert_eq!(query.scoring.top_k, Some(3));
        assert!(!query.translate_missing_texts);
    }

    #[test]
    fn conversation_query_defaults_to_infer() {
        let query: ConversationRecommendQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.mode, RecommendationMode::Infer);
        assert!(query.facets.municipalities.is_empty());
    }

    #[test]
    fn unknown_enumeration_values_are_rejected() {
        assert!(serde_json::from_value::<ConversationRecommendQuery>(json!({"mode": "guess"})).is_err());
        assert!(serde_json::from_value::<ServiceQuery>(json!({"priorization": "global"})).is_err());
        assert!(serde_json::from_value::<ServiceRecommendQuery>(json!({
            "need_text": "x",
            "language": "de"
        }))
        .is_err());
    }
}

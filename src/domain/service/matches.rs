//! Recommendation result records.

use serde::{Deserialize, Serialize};

use super::model::{Service, ServiceChannel};

/// A recommended or listed service with its channels.
///
/// `score` is present only for text-scored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMatch {
    pub service: Service,
    pub channels: Vec<ServiceChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ServiceMatch {
    pub fn new(service: Service, channels: Vec<ServiceChannel>) -> Self {
        Self {
            service,
            channels,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// A recommended service class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceClassMatch {
    pub name: String,
    pub service_class_code: String,
    pub score: f64,
}

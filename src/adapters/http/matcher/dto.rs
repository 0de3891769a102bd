//! Data transfer objects for the matcher endpoints.
//!
//! Request bodies reuse the application query types; this module only adds
//! the shapes that exist purely at the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// Query string accepted by the catalog read endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TranslateParams {
    #[serde(default)]
    pub translate_missing_texts: bool,
}

/// Health probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub snapshot_loaded_at: DateTime<Utc>,
    pub indexed_services: usize,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn service_not_found(id: &str) -> Self {
        Self::new(ErrorCode::ServiceNotFound, format!("Service not found: {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_service() {
        let error = ErrorResponse::service_not_found("S1");
        assert_eq!(error.code, "SERVICE_NOT_FOUND");
        assert!(error.message.contains("S1"));
    }

    #[test]
    fn translate_flag_defaults_to_false() {
        let params: TranslateParams = serde_json::from_str("{}").unwrap();
        assert!(!params.translate_missing_texts);
    }
}

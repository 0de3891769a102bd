//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid collaborator URL for {0}: must use http or https")]
    InvalidCollaboratorUrl(&'static str),

    #[error("Invalid collaborator timeout")]
    InvalidCollaboratorTimeout,

    #[error("Recommender top_k must be positive")]
    InvalidTopK,

    #[error("Recommender score threshold must be finite")]
    InvalidScoreThreshold,
}

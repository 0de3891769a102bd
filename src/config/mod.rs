//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `SERVICE_MATCHER`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use service_matcher::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod collaborators;
mod error;
mod recommender;
mod server;
mod store;

pub use collaborators::CollaboratorsConfig;
pub use error::{ConfigError, ValidationError};
pub use recommender::RecommenderConfig;
pub use server::{Environment, ServerConfig};
pub use store::StoreConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Embedding and lexical search service endpoints
    pub collaborators: CollaboratorsConfig,

    /// JSON document directory
    #[serde(default)]
    pub store: StoreConfig,

    /// Scoring defaults
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `SERVICE_MATCHER__*` variables:
    ///
    /// - `SERVICE_MATCHER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SERVICE_MATCHER__COLLABORATORS__VECTORIZER_URL=...` -> `collaborators.vectorizer_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value
    /// cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SERVICE_MATCHER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.collaborators.validate()?;
        self.store.validate()?;
        self.recommender.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::TextRecommender;
    use crate::domain::service::Language;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var(
            "SERVICE_MATCHER__COLLABORATORS__VECTORIZER_URL",
            "http://nlp-vectorizer:8000",
        );
        env::set_var(
            "SERVICE_MATCHER__COLLABORATORS__LEXICAL_SEARCH_URL",
            "http://lexical-text-search:8000",
        );
    }

    fn clear_env() {
        for key in [
            "SERVICE_MATCHER__COLLABORATORS__VECTORIZER_URL",
            "SERVICE_MATCHER__COLLABORATORS__LEXICAL_SEARCH_URL",
            "SERVICE_MATCHER__SERVER__PORT",
            "SERVICE_MATCHER__SERVER__ENVIRONMENT",
            "SERVICE_MATCHER__STORE__DATA_DIR",
            "SERVICE_MATCHER__RECOMMENDER__TOP_K",
            "SERVICE_MATCHER__RECOMMENDER__STRATEGY",
            "SERVICE_MATCHER__RECOMMENDER__LANGUAGE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.collaborators.vectorizer_url, "http://nlp-vectorizer:8000");
        assert_eq!(config.collaborators.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.store.data_dir, PathBuf::from("data"));
        assert_eq!(config.recommender.top_k, 20);
        assert_eq!(config.recommender.strategy, TextRecommender::All);
    }

    #[test]
    fn test_missing_collaborators_fail_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SERVICE_MATCHER__SERVER__PORT", "3000");
        env::set_var("SERVICE_MATCHER__SERVER__ENVIRONMENT", "production");
        env::set_var("SERVICE_MATCHER__STORE__DATA_DIR", "/srv/matcher");
        env::set_var("SERVICE_MATCHER__RECOMMENDER__TOP_K", "5");
        env::set_var("SERVICE_MATCHER__RECOMMENDER__STRATEGY", "nlp");
        env::set_var("SERVICE_MATCHER__RECOMMENDER__LANGUAGE", "sv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.store.data_dir, PathBuf::from("/srv/matcher"));
        let settings = config.recommender.settings();
        assert_eq!(settings.top_k, 5);
        assert_eq!(settings.strategy, TextRecommender::Nlp);
        assert_eq!(settings.language, Language::Sv);
    }
}

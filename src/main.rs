//! Service matcher HTTP server.
//!
//! Wires configuration into the store and collaborator adapters, publishes
//! the first catalog snapshot and serves the matcher router.

use std::error::Error;
use std::sync::Arc;

use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use service_matcher::adapters::collaborators::{HttpLexicalSearch, HttpTextVectorizer};
use service_matcher::adapters::http::{matcher_router, MatcherAppState};
use service_matcher::adapters::store::JsonDirectoryStore;
use service_matcher::application::ServiceMatcher;
use service_matcher::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let store = Arc::new(JsonDirectoryStore::open(config.store.data_dir.clone())?);
    let vectorizer = Arc::new(HttpTextVectorizer::new(&config.collaborators.vectorizer())?);
    let lexical = Arc::new(HttpLexicalSearch::new(&config.collaborators.lexical_search())?);

    let matcher = Arc::new(ServiceMatcher::new(
        store.clone(),
        store,
        vectorizer,
        lexical,
        config.recommender.settings(),
    ));
    let summary = matcher.sync().await?;
    info!(
        service_vectors = summary.service_vectors,
        class_vectors = summary.class_vectors,
        translations = summary.translations,
        data_dir = %config.store.data_dir.display(),
        "initial catalog snapshot loaded"
    );

    let app = matcher_router()
        .with_state(MatcherAppState::new(matcher))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    info!(%addr, environment = ?config.server.environment, "starting service matcher");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

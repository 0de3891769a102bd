//! HTTP handlers for the matcher endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::application::{
    ConversationRecommendQuery, IntentAndOptionsQuery, IntentQuery, MatchError,
    ServiceClassConversationQuery, ServiceClassRecommendQuery, ServiceMatcher, ServiceQuery,
    ServiceRecommendQuery,
};
use crate::domain::foundation::{ConversationId, ServiceId};

use super::dto::{ErrorResponse, HealthResponse, TranslateParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MatcherAppState {
    pub matcher: Arc<ServiceMatcher>,
}

impl MatcherAppState {
    pub fn new(matcher: Arc<ServiceMatcher>) -> Self {
        Self { matcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Health probe
pub async fn health(State(state): State<MatcherAppState>) -> Response {
    let snapshot = state.matcher.snapshot().current().await;
    let body = HealthResponse {
        status: "ok",
        snapshot_loaded_at: snapshot.loaded_at(),
        indexed_services: snapshot.service_vectors().len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /syncVectors - Reload the catalog snapshot
pub async fn sync_vectors(State(state): State<MatcherAppState>) -> Response {
    respond(state.matcher.sync().await)
}

/// GET /services
pub async fn list_services(
    State(state): State<MatcherAppState>,
    Query(params): Query<TranslateParams>,
) -> Response {
    respond(state.matcher.all_services(params.translate_missing_texts).await)
}

/// GET /services/:id
pub async fn get_service(
    State(state): State<MatcherAppState>,
    Path(service_id): Path<String>,
    Query(params): Query<TranslateParams>,
) -> Response {
    let id = match ServiceId::new(service_id.clone()) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.matcher.service(&id, params.translate_missing_texts).await {
        Ok(Some(service)) => (StatusCode::OK, Json(service)).into_response(),
        Ok(None) => service_not_found(&service_id),
        Err(e) => handle_match_error(e),
    }
}

/// POST /servicesFiltered
pub async fn services_filtered(
    State(state): State<MatcherAppState>,
    Json(query): Json<ServiceQuery>,
) -> Response {
    respond(state.matcher.services_filtered(&query).await)
}

/// GET /serviceChannels
pub async fn list_channels(State(state): State<MatcherAppState>) -> Response {
    respond(state.matcher.all_channels().await)
}

/// GET /serviceChannels/:service_id
pub async fn channels_for_service(
    State(state): State<MatcherAppState>,
    Path(service_id): Path<String>,
) -> Response {
    let id = match ServiceId::new(service_id.clone()) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.matcher.channels_for_service(&id).await {
        Ok(Some(channels)) => (StatusCode::OK, Json(channels)).into_response(),
        Ok(None) => service_not_found(&service_id),
        Err(e) => handle_match_error(e),
    }
}

/// GET /serviceClasses
pub async fn list_service_classes(State(state): State<MatcherAppState>) -> Response {
    (StatusCode::OK, Json(state.matcher.service_classes())).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Recommendations
// ════════════════════════════════════════════════════════════════════════════

/// POST /services/recommend
pub async fn recommend(
    State(state): State<MatcherAppState>,
    Json(query): Json<ServiceRecommendQuery>,
) -> Response {
    respond(state.matcher.recommend(&query).await)
}

/// POST /services/recommendByConversation/:conversation_id
pub async fn recommend_by_conversation(
    State(state): State<MatcherAppState>,
    Path(conversation_id): Path<String>,
    Json(query): Json<ConversationRecommendQuery>,
) -> Response {
    let id = match ConversationId::new(conversation_id) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };
    respond(state.matcher.recommend_by_conversation(&id, &query).await)
}

/// POST /services/recommendByIntent
pub async fn recommend_by_intent(
    State(state): State<MatcherAppState>,
    Json(query): Json<IntentQuery>,
) -> Response {
    respond(state.matcher.recommend_by_intent(&query).await)
}

/// POST /services/recommendByIntentAndOptions
pub async fn recommend_by_intent_and_options(
    State(state): State<MatcherAppState>,
    Json(query): Json<IntentAndOptionsQuery>,
) -> Response {
    respond(state.matcher.recommend_by_intent_and_options(&query).await)
}

/// POST /serviceClasses/recommend
pub async fn recommend_service_classes(
    State(state): State<MatcherAppState>,
    Json(query): Json<ServiceClassRecommendQuery>,
) -> Response {
    respond(state.matcher.recommend_service_classes(&query).await)
}

/// POST /serviceClasses/recommendByConversation/:conversation_id
pub async fn recommend_service_classes_by_conversation(
    State(state): State<MatcherAppState>,
    Path(conversation_id): Path<String>,
    Json(query): Json<ServiceClassConversationQuery>,
) -> Response {
    let id = match ConversationId::new(conversation_id) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };
    respond(
        state
            .matcher
            .recommend_service_classes_by_conversation(&id, &query)
            .await,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

fn respond<T: Serialize>(result: Result<T, MatchError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => handle_match_error(e),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}

fn service_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::service_not_found(id)),
    )
        .into_response()
}

/// Map application errors to HTTP responses.
fn handle_match_error(error: MatchError) -> Response {
    let status = match &error {
        MatchError::Upstream(e) => {
            error!(collaborator = e.service(), error = %e, "collaborator request failed");
            StatusCode::BAD_GATEWAY
        }
        MatchError::Store(e) => {
            error!(error = %e, "store read failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
        MatchError::Invariant(message) => {
            error!(%message, "invariant violated");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse::new(error.code(), error.to_string())),
    )
        .into_response()
}

//! Route configuration for the matcher endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    channels_for_service, get_service, health, list_channels, list_service_classes,
    list_services, recommend, recommend_by_conversation, recommend_by_intent,
    recommend_by_intent_and_options, recommend_service_classes,
    recommend_service_classes_by_conversation, services_filtered, sync_vectors, MatcherAppState,
};

/// Creates the matcher router with all endpoints.
///
/// Catalog reads accept `?translate_missing_texts=true`; recommendation
/// endpoints take a JSON body (`{}` when every option is left unset).
pub fn matcher_router() -> Router<MatcherAppState> {
    Router::new()
        .route("/", get(health))
        .route("/syncVectors", get(sync_vectors))
        .route("/services", get(list_services))
        .route("/services/:id", get(get_service))
        .route("/servicesFiltered", post(services_filtered))
        .route("/serviceChannels", get(list_channels))
        .route("/serviceChannels/:service_id", get(channels_for_service))
        .route("/serviceClasses", get(list_service_classes))
        .route("/services/recommend", post(recommend))
        .route(
            "/services/recommendByConversation/:conversation_id",
            post(recommend_by_conversation),
        )
        .route("/services/recommendByIntent", post(recommend_by_intent))
        .route(
            "/services/recommendByIntentAndOptions",
            post(recommend_by_intent_and_options),
        )
        .route("/serviceClasses/recommend", post(recommend_service_classes))
        .route(
            "/serviceClasses/recommendByConversation/:conversation_id",
            post(recommend_service_classes_by_conversation),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::collaborators::{ScriptedLexicalSearch, ScriptedVectorizer};
    use crate::adapters::store::InMemoryStore;
    use crate::application::{RecommenderSettings, ServiceMatcher};
    use crate::domain::foundation::ServiceId;
    use crate::domain::service::{FacetCodes, Service, ServiceVector};
    use crate::ports::CollaboratorError;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app(vectorizer: ScriptedVectorizer) -> Router {
        let store = InMemoryStore::new();
        let id = ServiceId::new("S1").unwrap();
        store.insert_service(Service::new(id.clone())).await;
        store
            .replace_service_vectors(vec![ServiceVector {
                id,
                vector: vec![1.0, 0.0],
                facets: FacetCodes {
                    service_class_codes: vec!["P20.1".to_string()],
                    municipality_codes: vec!["853".to_string()],
                    life_event_codes: Vec::new(),
                },
            }])
            .await;
        let store = Arc::new(store);
        let matcher = ServiceMatcher::new(
            store.clone(),
            store,
            Arc::new(vectorizer),
            Arc::new(ScriptedLexicalSearch::new()),
            RecommenderSettings::default(),
        );
        matcher.sync().await.unwrap();
        matcher_router().with_state(MatcherAppState::new(Arc::new(matcher)))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_indexed_services() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;
        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["indexed_services"], 1);
    }

    #[tokio::test]
    async fn unknown_service_is_not_found() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;

        let found = app.clone().oneshot(get_request("/services/S1")).await.unwrap();
        assert_eq!(found.status(), StatusCode::OK);

        let missing = app.oneshot(get_request("/services/S404")).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(missing).await["code"], "SERVICE_NOT_FOUND");
    }

    #[tokio::test]
    async fn indexed_service_without_channels_lists_none() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;

        let known = app.clone().oneshot(get_request("/serviceChannels/S1")).await.unwrap();
        assert_eq!(known.status(), StatusCode::OK);
        assert_eq!(json_body(known).await, json!([]));

        let unknown = app.oneshot(get_request("/serviceChannels/S404")).await.unwrap();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn recommend_returns_scored_services() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;
        let response = app
            .oneshot(post_request(
                "/services/recommend",
                json!({"need_text": "Ampumarata", "text_recommender": "nlp"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body[0]["service"]["id"], "S1");
        assert!(body[0]["score"].is_number());
    }

    #[tokio::test]
    async fn collaborator_failure_is_bad_gateway() {
        let vectorizer = ScriptedVectorizer::new(vec![1.0, 0.0])
            .with_error(CollaboratorError::unavailable("vectorizer", 503, "down"));
        let app = app(vectorizer).await;
        let response = app
            .oneshot(post_request(
                "/services/recommend",
                json!({"need_text": "Ampumarata", "text_recommender": "nlp"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["code"], "UPSTREAM_UNAVAILABLE");
    }

    #[tokio::test]
    async fn unknown_mode_is_rejected() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;
        let response = app
            .oneshot(post_request(
                "/services/recommendByConversation/C1",
                json!({"mode": "guess"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_conversation_recommends_nothing() {
        let app = app(ScriptedVectorizer::new(vec![1.0, 0.0])).await;
        let response = app
            .oneshot(post_request("/services/recommendByConversation/C1", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }
}

//! Integration tests for the service matcher.
//!
//! Drives `ServiceMatcher` end to end over the in-memory store and the
//! scripted collaborators:
//! 1. Free-text recommendation with facets and thresholds
//! 2. Conversation-driven recommendation across the mode state machine
//! 3. Intent and intent-with-options recommendation
//! 4. Service class recommendation and missing-text translation

use serde_json::json;
use std::sync::Arc;

use service_matcher::adapters::collaborators::{ScriptedLexicalSearch, ScriptedVectorizer};
use service_matcher::adapters::store::{ActivityDocument, InMemoryStore, StoreContents};
use service_matcher::application::{
    ConversationRecommendQuery, FacetNames, IntentAndOptionsQuery, IntentQuery,
    RecommenderSettings, ScoringOptions, ServiceClassConversationQuery,
    ServiceClassRecommendQuery, ServiceMatcher, ServiceRecommendQuery,
};
use service_matcher::domain::conversation::{Conversation, DialogueEvent};
use service_matcher::domain::foundation::{ConversationId, ServiceId};
use service_matcher::domain::recommendation::{RecommendationMode, TextRecommender};
use service_matcher::domain::service::{
    Area, FacetCodes, Service, ServiceChannel, ServiceClassVector, ServiceMatch, ServiceVector,
    TranslationRecord,
};
use service_matcher::ports::IntentMapping;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn sid(s: &str) -> ServiceId {
    ServiceId::new(s).unwrap()
}

fn cid(s: &str) -> ConversationId {
    ConversationId::new(s).unwrap()
}

fn codes(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn service(id: &str, name: &str, municipality: Option<&str>, class: &str) -> Service {
    let mut service = Service::new(sid(id));
    service.name.fi = Some(name.to_string());
    if let Some(code) = municipality {
        service.areas.fi = vec![Area::new("Municipality", code)];
    }
    service.service_classes.fi = vec![json!({"code": class})];
    service
}

fn vector(id: &str, vector: Vec<f64>, classes: &[&str], municipalities: &[&str], life_events: &[&str]) -> ServiceVector {
    ServiceVector {
        id: sid(id),
        vector,
        facets: FacetCodes {
            service_class_codes: codes(classes),
            municipality_codes: codes(municipalities),
            life_event_codes: codes(life_events),
        },
    }
}

fn class_vector(code: &str, name: &str, vector: Vec<f64>) -> ServiceClassVector {
    ServiceClassVector {
        code: code.to_string(),
        name: name.to_string(),
        vector,
    }
}

/// Shooting range in Turku, hunting licence in Naantali, and an unindexed
/// service without a vector.
fn catalog() -> StoreContents {
    StoreContents {
        services: vec![
            service("S0", "Ampumarata", Some("853"), "P20.1"),
            service("S1", "Indeksoimaton", None, "P1"),
            service("S2", "Metsästyslupa", Some("529"), "P19"),
        ],
        channels: vec![ServiceChannel::new("C0", vec![sid("S0")])],
        service_vectors: vec![
            vector("S0", vec![1.0, 0.0], &["P20.1"], &["853"], &["KE6"]),
            vector("S2", vec![0.5, 0.5], &["P19"], &["529"], &[]),
        ],
        class_vectors: vec![
            class_vector("P20.1", "Järjestyksen valvonta", vec![1.0, 0.0]),
            class_vector("P19", "Turvallisuus", vec![0.0, 1.0]),
        ],
        translations: vec![TranslationRecord {
            source_language: "fi".to_string(),
            target_language: "sv".to_string(),
            source_text: "Ampumarata".to_string(),
            target_text: "Skjutbana".to_string(),
        }],
        ..StoreContents::default()
    }
}

async fn matcher_over(store: InMemoryStore) -> ServiceMatcher {
    let store = Arc::new(store);
    let matcher = ServiceMatcher::new(
        store.clone(),
        store,
        Arc::new(ScriptedVectorizer::new(vec![1.0, 0.0])),
        Arc::new(ScriptedLexicalSearch::new().with_hit("S0", 0.2).with_hit("S2", 0.1)),
        RecommenderSettings::default(),
    );
    matcher.sync().await.unwrap();
    matcher
}

fn ids(matches: &[ServiceMatch]) -> Vec<&str> {
    matches.iter().map(|m| m.service.id.as_str()).collect()
}

fn conversation(id: &str, events: Vec<DialogueEvent>, slots: serde_json::Value) -> Conversation {
    Conversation {
        id: cid(id),
        events,
        slots: serde_json::from_value(slots).unwrap(),
    }
}

// =============================================================================
// Free text
// =============================================================================

#[tokio::test]
async fn free_text_ranks_semantic_matches_first() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;

    let matches = matcher
        .recommend(&ServiceRecommendQuery::new("ampumarata turku"))
        .await
        .unwrap();

    assert_eq!(ids(&matches), vec!["S0", "S2"]);
    assert!(matches.iter().all(|m| m.score.is_some()));
    assert_eq!(matches[0].channels.len(), 1);
}

#[tokio::test]
async fn municipality_names_restrict_candidates() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;

    let in_naantali = matcher
        .recommend(&ServiceRecommendQuery {
            facets: FacetNames::default().with_municipalities(vec!["Nådendal".to_string()]),
            ..ServiceRecommendQuery::new("metsästys")
        })
        .await
        .unwrap();
    assert_eq!(ids(&in_naantali), vec!["S2"]);

    let in_raisio = matcher
        .recommend(&ServiceRecommendQuery {
            facets: FacetNames::default().with_municipalities(vec!["Raisio".to_string()]),
            ..ServiceRecommendQuery::new("metsästys")
        })
        .await
        .unwrap();
    assert!(in_raisio.is_empty());
}

#[tokio::test]
async fn threshold_drops_weak_semantic_scores() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;

    let matches = matcher
        .recommend(&ServiceRecommendQuery {
            scoring: ScoringOptions {
                score_threshold: Some(0.8),
                text_recommender: Some(TextRecommender::Nlp),
                ..ScoringOptions::default()
            },
            ..ServiceRecommendQuery::new("ampumarata")
        })
        .await
        .unwrap();

    assert_eq!(ids(&matches), vec!["S0"]);
    assert_eq!(matches[0].score, Some(1.0));
}

#[tokio::test]
async fn empty_text_recommends_nothing() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;
    let matches = matcher.recommend(&ServiceRecommendQuery::new("")).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn missing_swedish_name_is_translated_on_request() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;

    let matches = matcher
        .recommend(&ServiceRecommendQuery {
            translate_missing_texts: true,
            scoring: ScoringOptions {
                text_recommender: Some(TextRecommender::Nlp),
                top_k: Some(1),
                ..ScoringOptions::default()
            },
            ..ServiceRecommendQuery::new("ampumarata")
        })
        .await
        .unwrap();

    let service = &matches[0].service;
    assert_eq!(service.name.sv.as_deref(), Some("Skjutbana"));
    assert!(service.name_auto_translated.sv);
    assert!(!service.name_auto_translated.fi);
}

// =============================================================================
// Conversations
// =============================================================================

#[tokio::test]
async fn conversation_sequence_follows_the_mode_state_machine() {
    let store = InMemoryStore::with_contents(catalog());
    let matcher = matcher_over(store.clone()).await;
    let id = cid("C1");
    let infer = ConversationRecommendQuery::default();

    // Unknown conversation: nothing to go on.
    let matches = matcher.recommend_by_conversation(&id, &infer).await.unwrap();
    assert!(matches.is_empty());

    // A life-event intent stops the category walk.
    store
        .insert_conversation(conversation("C1", vec![DialogueEvent::user("ke6_xyz")], json!({})))
        .await;
    let matches = matcher.recommend_by_conversation(&id, &infer).await.unwrap();
    assert!(matches.is_empty());

    // A service-class intent lists its category.
    store
        .insert_conversation(conversation(
            "C1",
            vec![DialogueEvent::user("ke6_xyz"), DialogueEvent::user("p20.1_ampumarata")],
            json!({}),
        ))
        .await;
    let matches = matcher.recommend_by_conversation(&id, &infer).await.unwrap();
    assert_eq!(ids(&matches), vec!["S0"]);
    assert!(matches[0].score.is_none());

    // An active search form without text is skipped.
    let mut events = vec![
        DialogueEvent::user("p20.1_ampumarata"),
        DialogueEvent::user("service_search"),
        DialogueEvent::bot("action", Some("service_search_form")),
    ];
    store
        .insert_conversation(conversation("C1", events.clone(), json!({})))
        .await;
    let matches = matcher.recommend_by_conversation(&id, &infer).await.unwrap();
    assert!(matches.is_empty());

    // With search text the form is scored as free text.
    events.push(DialogueEvent::bot("slot", Some("service_search_text")));
    store
        .insert_conversation(conversation(
            "C1",
            events,
            json!({"service_search_text": "ampumarata"}),
        ))
        .await;
    let matches = matcher.recommend_by_conversation(&id, &infer).await.unwrap();
    assert_eq!(ids(&matches), vec!["S0", "S2"]);
    assert!(matches[0].score.is_some());
}

#[tokio::test]
async fn category_walk_skips_newer_uncoded_intents() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_conversation(conversation(
            "C4",
            vec![
                DialogueEvent::user("p20.1_ampumarata"),
                DialogueEvent::user("sports_service_search"),
            ],
            json!({}),
        ))
        .await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_conversation(&cid("C4"), &ConversationRecommendQuery::default())
        .await
        .unwrap();
    assert_eq!(ids(&matches), vec!["S0"]);
    assert!(matches[0].score.is_none());
}

#[tokio::test]
async fn category_walk_stops_at_newer_life_event_intent() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_conversation(conversation(
            "C5",
            vec![
                DialogueEvent::user("p20.1_ampumarata"),
                DialogueEvent::user("ke6_muutto"),
            ],
            json!({}),
        ))
        .await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_conversation(&cid("C5"), &ConversationRecommendQuery::default())
        .await
        .unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn conversation_mode_scores_joined_messages() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_conversation(conversation("C2", vec![DialogueEvent::user("greet")], json!({})))
        .await;
    store.insert_activity(ActivityDocument::new(cid("C2"), "Haluan ampua")).await;
    store.insert_activity(ActivityDocument::new(cid("C2"), "Turussa")).await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_conversation(
            &cid("C2"),
            &ConversationRecommendQuery::with_mode(RecommendationMode::Conversation),
        )
        .await
        .unwrap();
    assert_eq!(ids(&matches), vec!["S0", "S2"]);
}

#[tokio::test]
async fn municipality_slot_restricts_conversation_results() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_conversation(conversation(
            "C3",
            vec![DialogueEvent::user("greet")],
            json!({"municipality": "Naantali"}),
        ))
        .await;
    store.insert_activity(ActivityDocument::new(cid("C3"), "Metsästys")).await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_conversation(
            &cid("C3"),
            &ConversationRecommendQuery::with_mode(RecommendationMode::Conversation),
        )
        .await
        .unwrap();
    assert_eq!(ids(&matches), vec!["S2"]);
}

// =============================================================================
// Intents
// =============================================================================

#[tokio::test]
async fn intent_lists_mapped_indexed_services() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_intent_mapping(IntentMapping::new("KE6_muutto", vec![sid("S1"), sid("S0")]))
        .await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_intent(&IntentQuery::new("ke6_muutto"))
        .await
        .unwrap();

    // S1 has no vector, so it is outside the snapshot.
    assert_eq!(ids(&matches), vec!["S0"]);
}

#[tokio::test]
async fn unmapped_intent_lists_nothing() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;
    let matches = matcher
        .recommend_by_intent(&IntentQuery::new("p19_tuntematon"))
        .await
        .unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn intent_options_top_up_with_text_matches() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_intent_mapping(IntentMapping {
            intent_text: Some("metsästys".to_string()),
            ..IntentMapping::new("p19_lupa", vec![sid("S2")])
        })
        .await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_intent_and_options(&IntentAndOptionsQuery::new("p19_lupa"))
        .await
        .unwrap();

    // Mapped service first, then text matches not already listed.
    assert_eq!(ids(&matches), vec!["S2", "S0"]);
    assert!(matches[0].score.is_none());
    assert!(matches[1].score.is_some());
}

#[tokio::test]
async fn intent_options_list_requested_classes_without_text() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_intent_mapping(IntentMapping::new("p19_lupa", Vec::new()))
        .await;
    let matcher = matcher_over(store).await;

    let matches = matcher
        .recommend_by_intent_and_options(&IntentAndOptionsQuery {
            facets: FacetNames::default().with_service_classes(vec!["P20.1".to_string()]),
            ..IntentAndOptionsQuery::new("p19_lupa")
        })
        .await
        .unwrap();

    assert_eq!(ids(&matches), vec!["S0"]);
}

// =============================================================================
// Service classes
// =============================================================================

#[tokio::test]
async fn service_classes_are_ranked_by_similarity() {
    let matcher = matcher_over(InMemoryStore::with_contents(catalog())).await;

    let classes = matcher
        .recommend_service_classes(&ServiceClassRecommendQuery {
            need_text: "ampumarata".to_string(),
            top_k: Some(1),
        })
        .await
        .unwrap();

    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].service_class_code, "P20.1");
    assert_eq!(classes[0].name, "Järjestyksen valvonta");
    assert_eq!(classes[0].score, 1.0);
}

#[tokio::test]
async fn service_classes_by_conversation_need_messages() {
    let store = InMemoryStore::with_contents(catalog());
    store
        .insert_conversation(conversation("C4", vec![DialogueEvent::user("greet")], json!({})))
        .await;
    let matcher = matcher_over(store.clone()).await;
    let query = ServiceClassConversationQuery { top_k: Some(2) };

    let none = matcher
        .recommend_service_classes_by_conversation(&cid("C4"), &query)
        .await
        .unwrap();
    assert!(none.is_empty());

    store.insert_activity(ActivityDocument::new(cid("C4"), "Ampumarata")).await;
    let classes = matcher
        .recommend_service_classes_by_conversation(&cid("C4"), &query)
        .await
        .unwrap();
    let codes: Vec<&str> = classes.iter().map(|c| c.service_class_code.as_str()).collect();
    assert_eq!(codes, vec!["P20.1", "P19"]);
    assert_eq!(classes[1].score, 0.0);
}

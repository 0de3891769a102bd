//! Stored document shapes and the lookups shared by the store adapters.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Conversation, DialogueEvent, Slots};
use crate::domain::foundation::{ConversationId, ServiceId};
use crate::domain::service::{Service, ServiceChannel};
use crate::ports::IntentMapping;

/// A conversation as the dialogue engine stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationDocument {
    #[serde(rename = "_id")]
    pub id: ConversationId,
    #[serde(default)]
    pub tracker: TrackerDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerDocument {
    #[serde(default)]
    pub slots: Option<Slots>,
    #[serde(default)]
    pub events: Option<Vec<DialogueEvent>>,
}

impl From<ConversationDocument> for Conversation {
    fn from(doc: ConversationDocument) -> Self {
        Conversation {
            id: doc.id,
            events: doc.tracker.events.unwrap_or_default(),
            slots: doc.tracker.slots.unwrap_or_default(),
        }
    }
}

impl From<Conversation> for ConversationDocument {
    fn from(conversation: Conversation) -> Self {
        ConversationDocument {
            id: conversation.id,
            tracker: TrackerDocument {
                slots: Some(conversation.slots),
                events: Some(conversation.events),
            },
        }
    }
}

/// One recorded user activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDocument {
    pub conversation_id: ConversationId,
    #[serde(default)]
    pub text: Option<String>,
}

impl ActivityDocument {
    pub fn new(conversation_id: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation_id,
            text: Some(text.into()),
        }
    }
}

/// Services with the given ids, in the order of `ids`.
pub(crate) fn select_services(services: &[Service], ids: &[ServiceId]) -> Vec<Service> {
    ids.iter()
        .filter_map(|id| services.iter().find(|s| &s.id == id))
        .cloned()
        .collect()
}

pub(crate) fn channels_serving(channels: &[ServiceChannel], ids: &[ServiceId]) -> Vec<ServiceChannel> {
    channels
        .iter()
        .filter(|c| ids.iter().any(|id| c.serves(id)))
        .cloned()
        .collect()
}

/// Ids of services whose external or own id is listed, in input order.
pub(crate) fn resolve_external(services: &[Service], external_ids: &[String]) -> Vec<ServiceId> {
    external_ids
        .iter()
        .filter_map(|ext| {
            services
                .iter()
                .find(|s| s.ptv_id.as_deref() == Some(ext.as_str()) || s.id.as_str() == ext)
                .map(|s| s.id.clone())
        })
        .collect()
}

/// Texts of one conversation's activities; activities without text are skipped.
pub(crate) fn activity_texts(activities: &[ActivityDocument], id: &ConversationId) -> Vec<String> {
    activities
        .iter()
        .filter(|a| &a.conversation_id == id)
        .filter_map(|a| a.text.clone())
        .collect()
}

pub(crate) fn find_mapping(mappings: &[IntentMapping], intent: &str) -> Option<IntentMapping> {
    mappings.iter().find(|m| m.matches(intent)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    #[test]
    fn conversation_document_reads_tracker() {
        let doc: ConversationDocument = serde_json::from_value(json!({
            "_id": "C1",
            "tracker": {
                "slots": {"municipality": "Turku"},
                "events": [{"event": "action", "name": "utter_greet"}]
            }
        }))
        .unwrap();
        let conversation = Conversation::from(doc);
        assert_eq!(conversation.events.len(), 1);
        assert_eq!(conversation.slots.text("municipality"), Some("Turku"));
    }

    #[test]
    fn null_tracker_parts_become_empty() {
        let doc: ConversationDocument = serde_json::from_value(json!({
            "_id": "C1",
            "tracker": {"slots": null, "events": null}
        }))
        .unwrap();
        let conversation = Conversation::from(doc);
        assert!(conversation.events.is_empty());
    }

    #[test]
    fn select_services_follows_requested_order() {
        let services = vec![Service::new(id("S1")), Service::new(id("S2"))];
        let picked = select_services(&services, &[id("S2"), id("missing"), id("S1")]);
        let ids: Vec<&str> = picked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S2", "S1"]);
    }

    #[test]
    fn external_ids_resolve_through_ptv_id() {
        let mut service = Service::new(id("S1"));
        service.ptv_id = Some("ptv-1".to_string());
        let resolved = resolve_external(&[service], &["ptv-1".to_string(), "ptv-9".to_string()]);
        assert_eq!(resolved, vec![id("S1")]);
    }

    #[test]
    fn activities_without_text_are_skipped() {
        let c1 = ConversationId::new("C1").unwrap();
        let activities = vec![
            ActivityDocument::new(c1.clone(), "Hei"),
            ActivityDocument {
                conversation_id: c1.clone(),
                text: None,
            },
            ActivityDocument::new(ConversationId::new("C2").unwrap(), "Moi"),
        ];
        assert_eq!(activity_texts(&activities, &c1), vec!["Hei"]);
    }
}

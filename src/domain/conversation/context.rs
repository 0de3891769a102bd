//! Context Extractor.
//!
//! Derives search facets from a conversation: relabels low-confidence
//! intents, repairs and normalizes the event log, keeps the turns whose
//! intent is a service search or names a facet code, and reads life events
//! and service classes off the most recent of those.

use once_cell::sync::Lazy;
use regex::Regex;

use super::event::{Conversation, Slots};
use super::normalizer::{is_search_intent, normalize, repair_rejections, Turn};
use super::policy::PolicyFilters;
use crate::domain::catalog::{life_events_from_intent, service_classes_from_intent};

/// Synthetic intent for ambiguous rankings.
pub const DISAMBIGUATION_INTENT: &str = "disambiguation";

/// Synthetic intent for low-confidence rankings.
pub const FALLBACK_INTENT: &str = "fallback";

const SEARCH_TEXT_SLOT: &str = "service_search_text";
const LIFE_EVENT_SLOT: &str = "life_event";
const MUNICIPALITY_SLOT: &str = "municipality";

static SEARCH_FORM_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new("(.*?)service_search_form").expect("valid search form regex"));

/// Everything the recommender needs to know about one conversation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationContext {
    pub slots: Slots,
    /// Retained intent turns, oldest first.
    pub intent_turns: Vec<Turn>,
    /// Intent names of `intent_turns`, most recent last.
    pub intents: Vec<String>,
    pub messages: Vec<String>,
    pub life_events: Vec<String>,
    pub service_classes: Vec<String>,
}

impl ConversationContext {
    /// Extracts the context. An absent conversation yields an empty context.
    pub fn extract(
        conversation: Option<Conversation>,
        messages: Vec<String>,
        policy: &PolicyFilters,
    ) -> Self {
        let Some(conversation) = conversation else {
            return Self::default();
        };

        let mut events = conversation.events;
        for event in events.iter_mut() {
            relabel(event, policy);
        }
        repair_rejections(&mut events);

        let intent_turns: Vec<Turn> = normalize(events)
            .into_iter()
            .filter(|turn| turn.intent_name().is_some_and(is_intent_of_interest))
            .collect();
        let intents: Vec<String> = intent_turns
            .iter()
            .filter_map(|turn| turn.intent_name().map(str::to_string))
            .collect();

        let slots = conversation.slots;
        let (life_events, service_classes) = match intents.last() {
            Some(latest) => (
                life_events_from_intent(latest),
                service_classes_from_intent(latest),
            ),
            None => (
                slots
                    .text(LIFE_EVENT_SLOT)
                    .map(|le| vec![le.to_uppercase()])
                    .unwrap_or_default(),
                Vec::new(),
            ),
        };

        Self {
            slots,
            intent_turns,
            intents,
            messages,
            life_events,
            service_classes,
        }
    }

    pub fn latest_intent(&self) -> Option<&str> {
        self.intents.last().map(String::as_str)
    }

    /// Municipality named by the `municipality` slot.
    pub fn municipality(&self) -> Option<&str> {
        self.slots.text(MUNICIPALITY_SLOT)
    }

    /// All user messages joined by single spaces.
    pub fn joined_messages(&self) -> String {
        self.messages.join(" ")
    }

    /// True if the most recent intent turn has an active form.
    pub fn search_is_active(&self) -> bool {
        self.intent_turns.last().is_some_and(Turn::has_form_events)
    }

    /// Search text of the most recent intent turn's form.
    pub fn active_search_text(&self) -> Option<&str> {
        let nested = self
            .intent_turns
            .last()
            .filter(|turn| turn.has_form_events())
            .map(Turn::nested)
            .unwrap_or(&[]);
        self.search_text(nested)
    }

    /// Search text of the latest service-search form, active or not.
    pub fn latest_search_text(&self) -> Option<&str> {
        let nested = self
            .intent_turns
            .iter()
            .rev()
            .find(|turn| turn.form_events.is_some() && turn.intent_name().is_some_and(is_search_intent))
            .map(Turn::nested)
            .unwrap_or(&[]);
        self.search_text(nested)
    }

    /// Reads `{prefix}service_search_text`, falling back to the plain slot.
    ///
    /// The prefix comes from the first form event named
    /// `{prefix}service_search_form`.
    fn search_text(&self, form_events: &[super::DialogueEvent]) -> Option<&str> {
        let prefix = form_events
            .iter()
            .filter_map(|event| event.name.as_deref())
            .find_map(|name| SEARCH_FORM_PREFIX.captures(name))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");

        self.slots
            .text(&format!("{prefix}{SEARCH_TEXT_SLOT}"))
            .or_else(|| self.slots.text(SEARCH_TEXT_SLOT))
    }
}

fn relabel(event: &mut super::DialogueEvent, policy: &PolicyFilters) {
    let Some(confidences) = event.parse_data.as_ref().and_then(|pd| pd.confidences()) else {
        return;
    };
    if confidences.len() > 1 && policy.disambiguate(&confidences) {
        event.relabel_intent(DISAMBIGUATION_INTENT);
    } else if !confidences.is_empty() && policy.fallback(&confidences) {
        event.relabel_intent(FALLBACK_INTENT);
    }
}

fn is_intent_of_interest(intent: &str) -> bool {
    is_search_intent(intent)
        || !service_classes_from_intent(intent).is_empty()
        || !life_events_from_intent(intent).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::event::{
        DialogueEvent, ParseData, RankedIntent, ACTION_EXECUTION_REJECTED, ACTIVE_LOOP,
    };
    use crate::domain::foundation::ConversationId;
    use serde_json::json;

    const POLICY: &str = "fallback_trigger: 0.40\ndisambiguation_trigger: '$0 < 2 * $1'";

    fn conversation(events: Vec<DialogueEvent>, slots: serde_json::Value) -> Conversation {
        Conversation {
            id: ConversationId::new("C1").unwrap(),
            events,
            slots: serde_json::from_value(slots).unwrap(),
        }
    }

    fn ranked(intent: &str, confidences: &[f64]) -> DialogueEvent {
        let mut event = DialogueEvent::user(intent);
        let ranking = confidences
            .iter()
            .map(|c| RankedIntent {
                name: Some(intent.to_string()),
                confidence: *c,
            })
            .collect();
        event.parse_data = Some(ParseData {
            intent_ranking: Some(ranking),
            ..ParseData::with_intent(intent)
        });
        event
    }

    fn extract(events: Vec<DialogueEvent>, slots: serde_json::Value) -> ConversationContext {
        ConversationContext::extract(
            Some(conversation(events, slots)),
            vec!["Tekstiä".to_string(), "Toinen teksti".to_string()],
            &PolicyFilters::compile(Some(POLICY)),
        )
    }

    #[test]
    fn absent_conversation_yields_empty_context() {
        let context = ConversationContext::extract(
            None,
            vec!["ignored".to_string()],
            &PolicyFilters::default(),
        );
        assert_eq!(context, ConversationContext::default());
        assert!(context.messages.is_empty());
    }

    #[test]
    fn keeps_messages_and_slots() {
        let context = extract(vec![DialogueEvent::user("p1_greet")], json!({"municipality": "Turku"}));
        assert_eq!(context.messages[0], "Tekstiä");
        assert_eq!(context.municipality(), Some("Turku"));
        assert_eq!(context.joined_messages(), "Tekstiä Toinen teksti");
    }

    #[test]
    fn retains_only_search_and_coded_intents() {
        let context = extract(
            vec![
                DialogueEvent::user("greet"),
                DialogueEvent::user("p1_greet"),
                DialogueEvent::user("chitchat.weather"),
                DialogueEvent::user("ke6_moving"),
            ],
            json!({}),
        );
        assert_eq!(context.intents, vec!["p1_greet", "ke6_moving"]);
    }

    #[test]
    fn facets_come_from_latest_intent_only() {
        let context = extract(
            vec![DialogueEvent::user("p20.1_police"), DialogueEvent::user("ke6_moving")],
            json!({}),
        );
        assert_eq!(context.life_events, vec!["KE6"]);
        assert!(context.service_classes.is_empty());
    }

    #[test]
    fn life_event_slot_applies_without_intents() {
        let context = extract(vec![DialogueEvent::user("greet")], json!({"life_event": "ke4"}));
        assert_eq!(context.life_events, vec!["KE4"]);

        let overridden = extract(vec![DialogueEvent::user("p1_greet")], json!({"life_event": "ke4"}));
        assert!(overridden.life_events.is_empty());
        assert_eq!(overridden.service_classes, vec!["P1"]);
    }

    #[test]
    fn ambiguous_ranking_is_relabelled_and_dropped() {
        let context = extract(vec![ranked("p1_greet", &[0.6, 0.4])], json!({}));
        assert!(context.intents.is_empty());
    }

    #[test]
    fn low_confidence_ranking_becomes_fallback() {
        let context = extract(vec![ranked("p1_greet", &[0.3])], json!({}));
        assert!(context.intents.is_empty());

        let confident = extract(vec![ranked("p1_greet", &[0.9, 0.05])], json!({}));
        assert_eq!(confident.intents, vec!["p1_greet"]);
    }

    #[test]
    fn active_search_uses_form_prefixed_slot() {
        let context = extract(
            vec![
                DialogueEvent::user("sports_service_search"),
                DialogueEvent::bot("action", Some("sports_service_search_form")),
                DialogueEvent::bot(ACTIVE_LOOP, Some("sports_service_search_form")),
            ],
            json!({"sports_service_search_text": "uimahalli", "service_search_text": "other"}),
        );
        assert!(context.search_is_active());
        assert_eq!(context.active_search_text(), Some("uimahalli"));
        assert_eq!(context.latest_search_text(), Some("uimahalli"));
    }

    #[test]
    fn search_text_falls_back_to_plain_slot() {
        let context = extract(
            vec![
                DialogueEvent::user("sports_service_search"),
                DialogueEvent::bot("action", Some("sports_service_search_form")),
            ],
            json!({"library_service_search_text": "kirja", "service_search_text": "uinti"}),
        );
        assert_eq!(context.active_search_text(), Some("uinti"));
    }

    #[test]
    fn rejected_form_keeps_intent_after_it() {
        let context = extract(
            vec![
                DialogueEvent::user("sports_service_search"),
                DialogueEvent::bot("action", Some("sports_service_search_form")),
                DialogueEvent::bot(ACTIVE_LOOP, Some("sports_service_search_form")),
                DialogueEvent::user("p20.1_reject"),
                DialogueEvent::bot(ACTION_EXECUTION_REJECTED, Some("sports_service_search_form")),
            ],
            json!({}),
        );
        assert_eq!(context.intents, vec!["sports_service_search", "p20.1_reject"]);
        assert!(!context.search_is_active());
        assert_eq!(context.service_classes, vec!["P20.1"]);
    }
}

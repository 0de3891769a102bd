//! Raw dialogue-engine tracker data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::ConversationId;

/// Event name of a rejected action.
pub const ACTION_EXECUTION_REJECTED: &str = "action_execution_rejected";

/// Event name of a form loop activation or deactivation.
pub const ACTIVE_LOOP: &str = "active_loop";

/// One entry of a conversation tracker's event log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_data: Option<ParseData>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DialogueEvent {
    /// A user utterance classified as `intent`.
    pub fn user(intent: impl Into<String>) -> Self {
        Self {
            parse_data: Some(ParseData::with_intent(intent)),
            ..Self::default()
        }
    }

    /// A bot-side event such as `action` or `active_loop`.
    pub fn bot(event: impl Into<String>, name: Option<&str>) -> Self {
        Self {
            event: Some(event.into()),
            name: name.map(str::to_string),
            ..Self::default()
        }
    }

    /// Name of the classified intent, if this is a user utterance.
    pub fn intent_name(&self) -> Option<&str> {
        self.parse_data
            .as_ref()
            .and_then(|pd| pd.intent.as_ref())
            .and_then(|intent| intent.name.as_deref())
    }

    pub fn is_rejection(&self) -> bool {
        self.event.as_deref() == Some(ACTION_EXECUTION_REJECTED)
    }

    /// An `active_loop` event without a form name deactivates the running form.
    pub fn is_loop_exit(&self) -> bool {
        self.event.as_deref() == Some(ACTIVE_LOOP) && self.name.is_none()
    }

    /// Replaces the classified intent with a synthetic one.
    pub fn relabel_intent(&mut self, name: &str) {
        if let Some(parse_data) = self.parse_data.as_mut() {
            parse_data.intent = Some(Intent::named(name));
        }
    }
}

/// NLU output attached to a user utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_ranking: Option<Vec<RankedIntent>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParseData {
    pub fn with_intent(name: impl Into<String>) -> Self {
        Self {
            intent: Some(Intent::named(name)),
            ..Self::default()
        }
    }

    /// Ranked confidences, best first, or `None` if no ranking was recorded.
    pub fn confidences(&self) -> Option<Vec<f64>> {
        self.intent_ranking
            .as_ref()
            .map(|ranking| ranking.iter().map(|r| r.confidence).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Intent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedIntent {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub confidence: f64,
}

/// Slot values filled during a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots(Map<String, Value>);

impl Slots {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String slot value, ignoring non-string and empty values.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// A conversation as held by the dialogue engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub events: Vec<DialogueEvent>,
    pub slots: Slots,
}

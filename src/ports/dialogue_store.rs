//! Dialogue store port.
//!
//! Read-only access to the dialogue engine's data: conversation trackers,
//! user messages, the dialogue policy text and the intent→service table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, ServiceId};
use crate::domain::recommendation::Priorization;

/// One row of the intent→service table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentMapping {
    pub intent: String,

    /// Services mapped directly by id.
    #[serde(default)]
    pub services: Vec<ServiceId>,

    /// Services mapped by external catalog id.
    #[serde(default)]
    pub ptv_services: Vec<String>,

    /// Free text to score when the intent is served with options.
    #[serde(default)]
    pub intent_text: Option<String>,

    #[serde(default)]
    pub intent_service_classes: Option<Vec<String>>,

    #[serde(default)]
    pub intent_priorization: Option<String>,
}

impl IntentMapping {
    pub fn new(intent: impl Into<String>, services: Vec<ServiceId>) -> Self {
        Self {
            intent: intent.into(),
            services,
            ..Self::default()
        }
    }

    /// True if the mapping carries a text or class option.
    pub fn has_options(&self) -> bool {
        self.intent_text.is_some() || self.intent_service_classes.is_some()
    }

    /// Stored priorization; unrecognized values read as `None`.
    pub fn priorization(&self) -> Option<Priorization> {
        match self.intent_priorization.as_deref() {
            Some("local") => Some(Priorization::Local),
            Some("national") => Some(Priorization::National),
            _ => None,
        }
    }

    pub fn matches(&self, intent: &str) -> bool {
        self.intent.to_lowercase() == intent.to_lowercase()
    }
}

/// Port for the dialogue engine's stores.
#[async_trait]
pub trait DialogueStore: Send + Sync {
    /// Find a conversation tracker by id.
    ///
    /// Returns `None` if not found.
    async fn conversation(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError>;

    /// Texts of the conversation's recorded user activities, in order.
    async fn messages(&self, id: &ConversationId) -> Result<Vec<String>, StoreError>;

    /// Raw dialogue policy text, if one is configured.
    async fn policy_text(&self) -> Result<Option<String>, StoreError>;

    /// First mapping whose intent equals `intent`, ignoring case.
    async fn intent_mapping(&self, intent: &str) -> Result<Option<IntentMapping>, StoreError>;
}

//! Loads a conversation from the dialogue store and extracts its context.

use std::sync::Arc;
use tracing::debug;

use crate::domain::conversation::{ConversationContext, PolicyFilters};
use crate::domain::foundation::ConversationId;
use crate::ports::{DialogueStore, StoreError};

pub struct ConversationContextLoader {
    dialogue: Arc<dyn DialogueStore>,
}

impl ConversationContextLoader {
    pub fn new(dialogue: Arc<dyn DialogueStore>) -> Self {
        Self { dialogue }
    }

    /// Context of conversation `id`; empty when the conversation is unknown.
    ///
    /// The policy text is fetched on every call so that confidence triggers
    /// follow the dialogue engine's current configuration.
    pub async fn load(&self, id: &ConversationId) -> Result<ConversationContext, StoreError> {
        let Some(conversation) = self.dialogue.conversation(id).await? else {
            debug!(conversation_id = %id, "conversation not found, using empty context");
            return Ok(ConversationContext::default());
        };

        let (policy_text, messages) =
            futures::try_join!(self.dialogue.policy_text(), self.dialogue.messages(id))?;
        let policy = PolicyFilters::compile(policy_text.as_deref());

        let context = ConversationContext::extract(Some(conversation), messages, &policy);
        debug!(
            conversation_id = %id,
            intents = ?context.intents,
            messages = context.messages.len(),
            "conversation context extracted"
        );
        Ok(context)
    }
}

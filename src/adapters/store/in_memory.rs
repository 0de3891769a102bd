//! In-Memory Store Adapter
//!
//! Holds catalog and dialogue documents in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::documents::{
    activity_texts, channels_serving, find_mapping, resolve_external, select_services,
    ActivityDocument,
};
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, ServiceId};
use crate::domain::service::{
    Service, ServiceChannel, ServiceClassVector, ServiceVector, TranslationRecord,
};
use crate::ports::{DialogueStore, IntentMapping, ServiceRepository, StoreError};

/// Everything the in-memory store holds.
#[derive(Debug, Clone, Default)]
pub struct StoreContents {
    pub services: Vec<Service>,
    pub channels: Vec<ServiceChannel>,
    pub service_vectors: Vec<ServiceVector>,
    pub class_vectors: Vec<ServiceClassVector>,
    pub translations: Vec<TranslationRecord>,
    pub conversations: HashMap<ConversationId, Conversation>,
    pub activities: Vec<ActivityDocument>,
    pub policy_text: Option<String>,
    pub intent_mappings: Vec<IntentMapping>,
}

/// In-memory catalog and dialogue store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contents: Arc<RwLock<StoreContents>>,
}

impl InMemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: StoreContents) -> Self {
        Self {
            contents: Arc::new(RwLock::new(contents)),
        }
    }

    pub async fn insert_service(&self, service: Service) {
        self.contents.write().await.services.push(service);
    }

    pub async fn insert_channel(&self, channel: ServiceChannel) {
        self.contents.write().await.channels.push(channel);
    }

    /// Replaces the vector index rows returned to the next sync.
    pub async fn replace_service_vectors(&self, vectors: Vec<ServiceVector>) {
        self.contents.write().await.service_vectors = vectors;
    }

    pub async fn insert_conversation(&self, conversation: Conversation) {
        self.contents
            .write()
            .await
            .conversations
            .insert(conversation.id.clone(), conversation);
    }

    pub async fn insert_activity(&self, activity: ActivityDocument) {
        self.contents.write().await.activities.push(activity);
    }

    pub async fn set_policy_text(&self, policy_text: impl Into<String>) {
        self.contents.write().await.policy_text = Some(policy_text.into());
    }

    pub async fn insert_intent_mapping(&self, mapping: IntentMapping) {
        self.contents.write().await.intent_mappings.push(mapping);
    }

    #[cfg(test)]
    pub async fn service_count(&self) -> usize {
        self.contents.read().await.services.len()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryStore {
    async fn find_service(&self, id: &ServiceId) -> Result<Option<Service>, StoreError> {
        let contents = self.contents.read().await;
        Ok(contents.services.iter().find(|s| &s.id == id).cloned())
    }

    async fn services_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, StoreError> {
        Ok(select_services(&self.contents.read().await.services, ids))
    }

    async fn all_services(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.contents.read().await.services.clone())
    }

    async fn all_channels(&self) -> Result<Vec<ServiceChannel>, StoreError> {
        Ok(self.contents.read().await.channels.clone())
    }

    async fn channels_for_services(
        &self,
        ids: &[ServiceId],
    ) -> Result<Vec<ServiceChannel>, StoreError> {
        Ok(channels_serving(&self.contents.read().await.channels, ids))
    }

    async fn resolve_external_ids(
        &self,
        external_ids: &[String],
    ) -> Result<Vec<ServiceId>, StoreError> {
        Ok(resolve_external(
            &self.contents.read().await.services,
            external_ids,
        ))
    }

    async fn service_vectors(&self) -> Result<Vec<ServiceVector>, StoreError> {
        Ok(self.contents.read().await.service_vectors.clone())
    }

    async fn class_vectors(&self) -> Result<Vec<ServiceClassVector>, StoreError> {
        Ok(self.contents.read().await.class_vectors.clone())
    }

    async fn translations(&self) -> Result<Vec<TranslationRecord>, StoreError> {
        Ok(self.contents.read().await.translations.clone())
    }
}

#[async_trait]
impl DialogueStore for InMemoryStore {
    async fn conversation(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        Ok(self.contents.read().await.conversations.get(id).cloned())
    }

    async fn messages(&self, id: &ConversationId) -> Result<Vec<String>, StoreError> {
        Ok(activity_texts(&self.contents.read().await.activities, id))
    }

    async fn policy_text(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.read().await.policy_text.clone())
    }

    async fn intent_mapping(&self, intent: &str) -> Result<Option<IntentMapping>, StoreError> {
        Ok(find_mapping(
            &self.contents.read().await.intent_mappings,
            intent,
        ))
    }
}

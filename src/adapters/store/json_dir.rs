//! JSON Directory Store Adapter
//!
//! Reads catalog and dialogue documents from a directory of JSON exports:
//!
//! | File | Content |
//! |------|---------|
//! | `services.json` | array of services |
//! | `channels.json` | array of service channels |
//! | `service_vectors.json` | array of `{id, vector, *_codes}` |
//! | `service_class_vectors.json` | array of `{code, name, vector}` |
//! | `translations.json` | array of translation records |
//! | `conversations.json` | array of `{_id, tracker: {slots, events}}` |
//! | `activities.json` | array of `{conversation_id, text}` |
//! | `intent_to_services.json` | array of intent mappings |
//! | `policies.txt` | dialogue policy text |
//!
//! Every call reads the file again, so a sync picks up replaced exports.
//! A missing file reads as empty.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::documents::{
    activity_texts, channels_serving, find_mapping, resolve_external, select_services,
    ActivityDocument, ConversationDocument,
};
use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, ServiceId};
use crate::domain::service::{
    Service, ServiceChannel, ServiceClassVector, ServiceVector, TranslationRecord,
};
use crate::ports::{DialogueStore, IntentMapping, ServiceRepository, StoreError};

const SERVICES: &str = "services.json";
const CHANNELS: &str = "channels.json";
const SERVICE_VECTORS: &str = "service_vectors.json";
const CLASS_VECTORS: &str = "service_class_vectors.json";
const TRANSLATIONS: &str = "translations.json";
const CONVERSATIONS: &str = "conversations.json";
const ACTIVITIES: &str = "activities.json";
const INTENT_MAPPINGS: &str = "intent_to_services.json";
const POLICIES: &str = "policies.txt";

#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    dir: PathBuf,
}

impl JsonDirectoryStore {
    /// Opens a store over `dir`, which must be an existing directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(StoreError::Unavailable(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_text(&self, file: &str) -> Result<Option<String>, StoreError> {
        let path = self.dir.join(file);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path.display().to_string(), e)),
        }
    }

    async fn read_array<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        match self.read_text(file).await? {
            Some(text) => serde_json::from_str(&text).map_err(|e| StoreError::parse(file, e)),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl ServiceRepository for JsonDirectoryStore {
    async fn find_service(&self, id: &ServiceId) -> Result<Option<Service>, StoreError> {
        let services: Vec<Service> = self.read_array(SERVICES).await?;
        Ok(services.into_iter().find(|s| &s.id == id))
    }

    async fn services_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, StoreError> {
        let services: Vec<Service> = self.read_array(SERVICES).await?;
        Ok(select_services(&services, ids))
    }

    async fn all_services(&self) -> Result<Vec<Service>, StoreError> {
        self.read_array(SERVICES).await
    }

    async fn all_channels(&self) -> Result<Vec<ServiceChannel>, StoreError> {
        self.read_array(CHANNELS).await
    }

    async fn channels_for_services(
        &self,
        ids: &[ServiceId],
    ) -> Result<Vec<ServiceChannel>, StoreError> {
        let channels: Vec<ServiceChannel> = self.read_array(CHANNELS).await?;
        Ok(channels_serving(&channels, ids))
    }

    async fn resolve_external_ids(
        &self,
        external_ids: &[String],
    ) -> Result<Vec<ServiceId>, StoreError> {
        if external_ids.is_empty() {
            return Ok(Vec::new());
        }
        let services: Vec<Service> = self.read_array(SERVICES).await?;
        Ok(resolve_external(&services, external_ids))
    }

    async fn service_vectors(&self) -> Result<Vec<ServiceVector>, StoreError> {
        self.read_array(SERVICE_VECTORS).await
    }

    async fn class_vectors(&self) -> Result<Vec<ServiceClassVector>, StoreError> {
        self.read_array(CLASS_VECTORS).await
    }

    async fn translations(&self) -> Result<Vec<TranslationRecord>, StoreError> {
        self.read_array(TRANSLATIONS).await
    }
}

#[async_trait]
impl DialogueStore for JsonDirectoryStore {
    async fn conversation(&self, id: &ConversationId) -> Result<Option<Conversation>, StoreError> {
        let documents: Vec<ConversationDocument> = self.read_array(CONVERSATIONS).await?;
        Ok(documents
            .into_iter()
            .find(|doc| &doc.id == id)
            .map(Conversation::from))
    }

    async fn messages(&self, id: &ConversationId) -> Result<Vec<String>, StoreError> {
        let activities: Vec<ActivityDocument> = self.read_array(ACTIVITIES).await?;
        Ok(activity_texts(&activities, id))
    }

    async fn policy_text(&self) -> Result<Option<String>, StoreError> {
        self.read_text(POLICIES).await
    }

    async fn intent_mapping(&self, intent: &str) -> Result<Option<IntentMapping>, StoreError> {
        let mappings: Vec<IntentMapping> = self.read_array(INTENT_MAPPINGS).await?;
        Ok(find_mapping(&mappings, intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, value: serde_json::Value) {
        std::fs::write(dir.path().join(file), value.to_string()).unwrap();
    }

    fn id(s: &str) -> ServiceId {
        ServiceId::new(s).unwrap()
    }

    #[test]
    fn open_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            JsonDirectoryStore::open(missing),
            Err(StoreError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn missing_files_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonDirectoryStore::open(dir.path()).unwrap();

        assert!(store.all_services().await.unwrap().is_empty());
        assert!(store.policy_text().await.unwrap().is_none());
        assert!(store
            .conversation(&ConversationId::new("C1").unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn reads_services_and_vectors() {
        let dir = TempDir::new().unwrap();
        write(&dir, SERVICES, json!([{"id": "S1"}, {"id": "S2", "ptvId": "ptv-2"}]));
        write(
            &dir,
            SERVICE_VECTORS,
            json!([{
                "id": "S1",
                "vector": [0.1, 0.2],
                "service_class_codes": ["P20.1"],
                "municipality_codes": null,
                "life_event_codes": ["KE6"]
            }]),
        );
        let store = JsonDirectoryStore::open(dir.path()).unwrap();

        let picked = store.services_by_ids(&[id("S2"), id("S1")]).await.unwrap();
        assert_eq!(picked[0].id, id("S2"));
        assert_eq!(
            store.resolve_external_ids(&["ptv-2".to_string()]).await.unwrap(),
            vec![id("S2")]
        );

        let vectors = store.service_vectors().await.unwrap();
        assert_eq!(vectors[0].facets.service_class_codes, vec!["P20.1"]);
        assert!(vectors[0].facets.municipality_codes.is_empty());
    }

    #[tokio::test]
    async fn reads_dialogue_documents() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            CONVERSATIONS,
            json!([{"_id": "C1", "tracker": {"slots": {}, "events": [
                {"event": "user", "parse_data": {"intent": {"name": "p1_greet"}}}
            ]}}]),
        );
        write(
            &dir,
            ACTIVITIES,
            json!([
                {"conversation_id": "C1", "text": "Tekstiä"},
                {"conversation_id": "C2", "text": "Muuta"}
            ]),
        );
        write(
            &dir,
            INTENT_MAPPINGS,
            json!([{"intent": "p1_greet", "services": ["S1"], "intent_text": "tervehdys"}]),
        );
        std::fs::write(dir.path().join(POLICIES), "fallback_trigger: 0.40\n").unwrap();
        let store = JsonDirectoryStore::open(dir.path()).unwrap();

        let c1 = ConversationId::new("C1").unwrap();
        let conversation = store.conversation(&c1).await.unwrap().unwrap();
        assert_eq!(conversation.events[0].intent_name(), Some("p1_greet"));
        assert_eq!(store.messages(&c1).await.unwrap(), vec!["Tekstiä"]);
        assert!(store.intent_mapping("P1_GREET").await.unwrap().unwrap().has_options());
        assert!(store.policy_text().await.unwrap().unwrap().contains("fallback_trigger"));
    }

    #[tokio::test]
    async fn malformed_document_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SERVICES), "{not json").unwrap();
        let store = JsonDirectoryStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.all_services().await,
            Err(StoreError::Parse { .. })
        ));
    }
}

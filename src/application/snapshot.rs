//! Shared handle to the current catalog snapshot.
//!
//! Readers clone the inner `Arc` and keep serving from it for the rest of
//! their request. A sync builds a complete new snapshot first and then swaps
//! the pointer, so no reader ever sees a partially loaded catalog.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::service::{CatalogSnapshot, TranslationTable};
use crate::ports::{ServiceRepository, StoreError};

#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    current: Arc<RwLock<Arc<CatalogSnapshot>>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// The snapshot serving new requests.
    pub async fn current(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Publishes `snapshot` to all subsequent readers.
    pub async fn replace(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write().await = Arc::clone(&snapshot);
        snapshot
    }
}

/// Reads vectors, class vectors and translations into a fresh snapshot.
pub async fn load_snapshot(repository: &dyn ServiceRepository) -> Result<CatalogSnapshot, StoreError> {
    let (service_vectors, class_vectors, translations) = futures::try_join!(
        repository.service_vectors(),
        repository.class_vectors(),
        repository.translations(),
    )?;

    let snapshot = CatalogSnapshot::new(
        service_vectors,
        class_vectors,
        TranslationTable::from_records(translations),
    );
    info!(
        service_vectors = snapshot.service_vectors().len(),
        class_vectors = snapshot.class_vectors().len(),
        translations = snapshot.translations().len(),
        "catalog snapshot loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::domain::foundation::ServiceId;
    use crate::domain::service::{FacetCodes, ServiceVector};

    fn vector(id: &str) -> ServiceVector {
        ServiceVector {
            id: ServiceId::new(id).unwrap(),
            vector: vec![1.0, 0.0],
            facets: FacetCodes::default(),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let handle = SnapshotHandle::default();
        assert!(handle.current().await.service_vectors().is_empty());
    }

    #[tokio::test]
    async fn readers_keep_their_snapshot_across_a_swap() {
        let handle = SnapshotHandle::default();
        let before = handle.current().await;

        let store = InMemoryStore::new();
        store.replace_service_vectors(vec![vector("S1")]).await;
        handle.replace(load_snapshot(&store).await.unwrap()).await;

        assert!(before.service_vectors().is_empty());
        assert_eq!(handle.current().await.service_vectors().len(), 1);
    }

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let handle = SnapshotHandle::default();
        let other = handle.clone();

        let store = InMemoryStore::new();
        store.replace_service_vectors(vec![vector("S1"), vector("S2")]).await;
        handle.replace(load_snapshot(&store).await.unwrap()).await;

        assert_eq!(other.current().await.service_vectors().len(), 2);
    }
}

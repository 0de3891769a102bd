//! Service repository port (read side).
//!
//! Defines the contract for reading catalog documents and the indexes a
//! sync loads into the snapshot. The catalog is owned by the ingestion
//! pipeline; this crate never writes it.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::ServiceId;
use crate::domain::service::{
    Service, ServiceChannel, ServiceClassVector, ServiceVector, TranslationRecord,
};

/// Repository port for the service catalog.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a service by its id.
    ///
    /// Returns `None` if not found.
    async fn find_service(&self, id: &ServiceId) -> Result<Option<Service>, StoreError>;

    /// Services with the given ids, in the order of `ids`.
    ///
    /// Unknown ids are skipped.
    async fn services_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, StoreError>;

    async fn all_services(&self) -> Result<Vec<Service>, StoreError>;

    async fn all_channels(&self) -> Result<Vec<ServiceChannel>, StoreError>;

    /// Channels serving at least one of the given services.
    async fn channels_for_services(
        &self,
        ids: &[ServiceId],
    ) -> Result<Vec<ServiceChannel>, StoreError>;

    /// Maps external catalog ids to service ids, in input order.
    ///
    /// Ids that match no service are dropped.
    async fn resolve_external_ids(&self, external_ids: &[String])
        -> Result<Vec<ServiceId>, StoreError>;

    /// Source rows for a snapshot sync.
    async fn service_vectors(&self) -> Result<Vec<ServiceVector>, StoreError>;

    async fn class_vectors(&self) -> Result<Vec<ServiceClassVector>, StoreError>;

    async fn translations(&self) -> Result<Vec<TranslationRecord>, StoreError>;
}

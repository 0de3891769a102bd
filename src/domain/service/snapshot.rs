//! The immutable in-memory catalog snapshot.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::translation::TranslationTable;
use super::vectors::{Classification, ServiceClassVector, ServiceVector};
use crate::domain::foundation::ServiceId;

/// Vector index, classification index and translation table as loaded by one
/// sync. Classifications are derived from the vectors, so both indexes are
/// always row-aligned by service id.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    service_vectors: Vec<ServiceVector>,
    classifications: Vec<Classification>,
    class_vectors: Vec<ServiceClassVector>,
    translations: TranslationTable,
    known_ids: HashSet<ServiceId>,
    loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(
        service_vectors: Vec<ServiceVector>,
        class_vectors: Vec<ServiceClassVector>,
        translations: TranslationTable,
    ) -> Self {
        let classifications: Vec<Classification> =
            service_vectors.iter().map(Classification::from).collect();
        let known_ids = service_vectors.iter().map(|v| v.id.clone()).collect();
        Self {
            service_vectors,
            classifications,
            class_vectors,
            translations,
            known_ids,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), TranslationTable::default())
    }

    pub fn service_vectors(&self) -> &[ServiceVector] {
        &self.service_vectors
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn class_vectors(&self) -> &[ServiceClassVector] {
        &self.class_vectors
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// True if the service is present in the classification index.
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.known_ids.contains(id)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

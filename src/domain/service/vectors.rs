//! Precomputed embeddings and facet index rows.

use serde::{Deserialize, Serialize};

use super::localized::null_as_default;
use crate::domain::foundation::ServiceId;

/// Facet codes attached to one service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCodes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_class_codes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub municipality_codes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub life_event_codes: Vec<String>,
}

/// Rows that carry a service id and its facet codes.
pub trait Faceted {
    fn service_id(&self) -> &ServiceId;
    fn facets(&self) -> &FacetCodes;
}

/// Semantic vector of a service plus its facet index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceVector {
    pub id: ServiceId,
    pub vector: Vec<f64>,
    #[serde(flatten)]
    pub facets: FacetCodes,
}

impl Faceted for ServiceVector {
    fn service_id(&self) -> &ServiceId {
        &self.id
    }

    fn facets(&self) -> &FacetCodes {
        &self.facets
    }
}

/// Facet index row without the vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub id: ServiceId,
    #[serde(flatten)]
    pub facets: FacetCodes,
}

impl From<&ServiceVector> for Classification {
    fn from(vector: &ServiceVector) -> Self {
        Self {
            id: vector.id.clone(),
            facets: vector.facets.clone(),
        }
    }
}

impl Faceted for Classification {
    fn service_id(&self) -> &ServiceId {
        &self.id
    }

    fn facets(&self) -> &FacetCodes {
        &self.facets
    }
}

/// Semantic vector of a service class taxonomy node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceClassVector {
    pub code: String,
    pub name: String,
    pub vector: Vec<f64>,
}

/// Dot product over the shared prefix of two vectors.
///
/// Stored vectors are pre-normalized, so this is the cosine similarity.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

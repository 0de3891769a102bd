//! Service domain module.
//!
//! Catalog documents (services, channels), the precomputed vector and facet
//! indexes, the translation table and the immutable snapshot that bundles
//! them for request handling.

mod locale;
mod localized;
mod matches;
mod model;
mod snapshot;
mod translation;
mod vectors;

pub use locale::{restrict_channel, restrict_service};
pub use localized::{Language, Localized};
pub use matches::{ServiceClassMatch, ServiceMatch};
pub use model::{
    Address, Area, AreaKind, Description, Service, ServiceChannel, TRANSLATABLE_DESCRIPTION_TYPES,
};
pub use snapshot::CatalogSnapshot;
pub use translation::{TranslationRecord, TranslationTable};
pub use vectors::{dot, Classification, FacetCodes, Faceted, ServiceClassVector, ServiceVector};

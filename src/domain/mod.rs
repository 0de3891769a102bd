//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `catalog` - Facet reference data and intent code parsing
//! - `service` - Service catalog records, locale restriction and snapshots
//! - `conversation` - Dialogue tracker data, normalization and context extraction
//! - `recommendation` - Filtering, ranking and mode selection

pub mod catalog;
pub mod conversation;
pub mod foundation;
pub mod recommendation;
pub mod service;

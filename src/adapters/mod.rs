//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `collaborators` - embedding and lexical search services
//! - `store` - catalog and dialogue documents
//! - `http` - axum REST surface

pub mod collaborators;
pub mod http;
pub mod store;

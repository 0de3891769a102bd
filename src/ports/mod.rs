//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `TextVectorizer` - Embedding service
//! - `LexicalSearch` - BM25 search service
//!
//! ## Store Ports
//!
//! - `ServiceRepository` - Catalog documents and snapshot source rows
//! - `DialogueStore` - Conversations, messages, policy text, intent mappings

mod dialogue_store;
mod errors;
mod lexical_search;
mod service_repository;
mod text_vectorizer;

pub use dialogue_store::{DialogueStore, IntentMapping};
pub use errors::{CollaboratorError, StoreError};
pub use lexical_search::{LexicalHit, LexicalSearch};
pub use service_repository::ServiceRepository;
pub use text_vectorizer::TextVectorizer;

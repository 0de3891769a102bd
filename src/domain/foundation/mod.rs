//! Foundation module - Shared domain primitives.
//!
//! Identifiers and error types that form the vocabulary of the service
//! matcher domain.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ConversationId, ServiceId};

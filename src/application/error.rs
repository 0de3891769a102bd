//! Errors surfaced by the application layer.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::{CollaboratorError, StoreError};

/// Failure of a single recommendation or catalog request.
///
/// Missing conversations, services and intent mappings are not errors;
/// they produce `None` or empty results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("upstream failure: {0}")]
    Upstream(#[from] CollaboratorError),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// A state the request pipeline should never reach.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl MatchError {
    pub fn invariant(message: impl Into<String>) -> Self {
        MatchError::Invariant(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::Upstream(_) => ErrorCode::UpstreamUnavailable,
            MatchError::Store(_) => ErrorCode::StoreUnavailable,
            MatchError::Invariant(_) => ErrorCode::InvariantViolation,
        }
    }
}

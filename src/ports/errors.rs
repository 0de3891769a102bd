//! Errors shared by the collaborator and store ports.

use thiserror::Error;

/// Failure of a remote scoring collaborator.
///
/// Any non-success response is fatal for the request; retries are left to
/// the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator answered with a non-success status.
    #[error("{service} returned {status}: {body}")]
    Unavailable {
        service: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response.
    #[error("{service} transport error: {message}")]
    Transport { service: String, message: String },

    /// The response body did not have the expected shape.
    #[error("{service} sent an invalid response: {message}")]
    InvalidResponse { service: String, message: String },
}

impl CollaboratorError {
    pub fn unavailable(service: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        CollaboratorError::Unavailable {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    pub fn transport(service: impl Into<String>, message: impl Into<String>) -> Self {
        CollaboratorError::Transport {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn invalid_response(service: impl Into<String>, message: impl Into<String>) -> Self {
        CollaboratorError::InvalidResponse {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Name of the collaborator that failed.
    pub fn service(&self) -> &str {
        match self {
            CollaboratorError::Unavailable { service, .. }
            | CollaboratorError::Transport { service, .. }
            | CollaboratorError::InvalidResponse { service, .. } => service,
        }
    }
}

/// Failure of a backing document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("store document {document} is malformed: {message}")]
    Parse { document: String, message: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        StoreError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(document: impl Into<String>, err: impl std::fmt::Display) -> Self {
        StoreError::Parse {
            document: document.into(),
            message: err.to_string(),
        }
    }
}

//! HTTP adapter for the matcher endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, TranslateParams};
pub use handlers::MatcherAppState;
pub use routes::matcher_router;

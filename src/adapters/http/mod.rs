//! HTTP adapters - REST API implementations.

pub mod matcher;

pub use matcher::{matcher_router, MatcherAppState};

//! Service Matcher - public service recommendation engine
//!
//! Recommends government services from free text, dialogue conversations
//! and declared intents, filtered by municipality, life event and service
//! class facets.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

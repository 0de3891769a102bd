//! Application layer - request orchestration over the ports.
//!
//! - `ServiceMatcher` - catalog reads and every recommendation operation
//! - `HybridRecommender` - free-text scoring over the snapshot
//! - `ConversationContextLoader` - dialogue store to `ConversationContext`
//! - `SnapshotHandle` - the atomically swapped catalog snapshot

mod context_loader;
mod error;
mod matcher;
mod queries;
mod recommender;
mod snapshot;

pub use context_loader::ConversationContextLoader;
pub use error::MatchError;
pub use matcher::{ServiceMatcher, SyncSummary};
pub use queries::{
    ConversationRecommendQuery, FacetNames, IntentAndOptionsQuery, IntentQuery,
    RecommenderSettings, ScoringOptions, ServiceClassConversationQuery, ServiceClassRecommendQuery,
    ServiceQuery, ServiceRecommendQuery,
};
pub use recommender::{HybridRecommender, TextQuery};
pub use snapshot::{load_snapshot, SnapshotHandle};

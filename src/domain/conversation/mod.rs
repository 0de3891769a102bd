//! Conversation domain module.
//!
//! Raw dialogue-engine tracker data, the normalizer that groups form
//! interactions into turns, the policy compiler for confidence triggers and
//! the context extractor built on top of them.

mod context;
mod event;
mod normalizer;
mod policy;

pub use context::{ConversationContext, DISAMBIGUATION_INTENT, FALLBACK_INTENT};
pub use event::{
    Conversation, DialogueEvent, Intent, ParseData, RankedIntent, Slots,
    ACTION_EXECUTION_REJECTED, ACTIVE_LOOP,
};
pub use normalizer::{
    is_search_intent, normalize, repair_rejections, FormState, FormTransition, Normalizer, Turn,
};
pub use policy::PolicyFilters;

//! Recommendation mode selection for conversation-based requests.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::conversation::ConversationContext;

/// Mode requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Score the search form's text slot.
    Search,
    /// Look up services mapped to the latest intent.
    Intent,
    /// Score all user messages joined together.
    Conversation,
    /// Pick search or intent from the conversation state.
    #[default]
    Infer,
}

/// Mode committed to for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedMode {
    /// Free-text search; `None` when the form has no usable text.
    Search(Option<String>),
    Intent,
    Conversation,
    /// A search form is active but holds no text yet.
    Skip,
}

impl RecommendationMode {
    /// Commits to a concrete mode.
    ///
    /// `Infer` chooses search when the latest intent turn has an active form
    /// with search text, intent when no form is active, and skips otherwise.
    pub fn resolve(self, context: &ConversationContext) -> ResolvedMode {
        match self {
            RecommendationMode::Search => {
                ResolvedMode::Search(context.latest_search_text().map(str::to_string))
            }
            RecommendationMode::Intent => ResolvedMode::Intent,
            RecommendationMode::Conversation => ResolvedMode::Conversation,
            RecommendationMode::Infer => {
                if !context.search_is_active() {
                    return ResolvedMode::Intent;
                }
                match context.active_search_text() {
                    Some(text) => ResolvedMode::Search(Some(text.to_string())),
                    None => ResolvedMode::Skip,
                }
            }
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolvedMode::Search(_) => "search",
            ResolvedMode::Intent => "intent",
            ResolvedMode::Conversation => "conversation",
            ResolvedMode::Skip => "skip",
        };
        f.write_str(s)
    }
}

//! Request enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Signal used to score free text against services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextRecommender {
    /// BM25 scores from the lexical search service.
    Lexical,
    /// Embedding similarity.
    Nlp,
    /// Both, fused.
    #[default]
    All,
}

impl TextRecommender {
    pub fn uses_lexical(&self) -> bool {
        matches!(self, Self::Lexical | Self::All)
    }

    pub fn uses_nlp(&self) -> bool {
        matches!(self, Self::Nlp | Self::All)
    }
}

impl fmt::Display for TextRecommender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lexical => "lexical",
            Self::Nlp => "nlp",
            Self::All => "all",
        };
        f.write_str(s)
    }
}

/// Ordering of a filtered catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priorization {
    /// Services with area records first.
    #[default]
    Local,
    /// Services without area records first.
    National,
}

//! Recommendation domain module.
//!
//! Pure pieces of the recommender: request enumerations, facet filtering,
//! score selection and fusion, and conversation mode resolution.

mod filter;
mod mode;
mod ranking;
mod strategy;

pub use filter::{FacetFilter, FacetSelection};
pub use mode::{RecommendationMode, ResolvedMode};
pub use ranking::{
    class_match_count, fuse, top_k, CLASS_MATCH_SHARE, FUSION_TOP_N, LEXICAL_BOOST_MIN,
    LEXICAL_FLOOR, NLP_MISSING_SCORE, NLP_SCALE,
};
pub use strategy::{Priorization, TextRecommender};

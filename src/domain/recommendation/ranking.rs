//! Top-K selection and lexical/semantic score fusion.
//!
//! Score lists are insertion-ordered `(key, score)` pairs. Selection is a
//! stable sort, so equal scores keep their input order across runs.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Number of best ids per signal that earn the fusion boost.
pub const FUSION_TOP_N: usize = 10;

/// Minimum raw lexical score for the lexical boost.
pub const LEXICAL_BOOST_MIN: f64 = 55.0;

/// Semantic score assumed for ids the embedding side did not score.
pub const NLP_MISSING_SCORE: f64 = 0.01;

/// Scale applied to semantic scores before fusion.
pub const NLP_SCALE: f64 = 100.0;

/// Lexical score assumed for unscored or non-positive ids.
pub const LEXICAL_FLOOR: f64 = 1.0;

/// Share of service classes kept when matching classes by text.
pub const CLASS_MATCH_SHARE: f64 = 0.7;

/// Highest `k` entries scoring at least `threshold`, best first.
///
/// The threshold is applied after selection, so fewer than `k` entries may
/// be returned even if lower-ranked entries would pass it.
pub fn top_k<K: Clone>(scores: &[(K, f64)], k: usize, threshold: f64) -> Vec<(K, f64)> {
    let mut ranked: Vec<&(K, f64)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(k)
        .filter(|(_, score)| *score >= threshold)
        .cloned()
        .collect()
}

/// Number of classes kept when matching classes by text.
pub fn class_match_count(class_count: usize) -> usize {
    (CLASS_MATCH_SHARE * class_count as f64).ceil() as usize
}

/// Fuses semantic and lexical scores.
///
/// For every id in either list: the semantic term is `(nlp or 0.01) * 100`,
/// squared when the id is among the ten best non-negative semantic ids; the
/// lexical term is the lexical score (1 when absent or not positive), squared
/// when the id is among the ten best lexical ids and scored at least 55. The
/// fused score is their product. Output order is semantic ids first, then ids
/// only the lexical side scored.
pub fn fuse<K: Clone + Eq + Hash>(nlp: &[(K, f64)], lexical: &[(K, f64)]) -> Vec<(K, f64)> {
    let top_nlp: HashSet<K> = top_k(nlp, FUSION_TOP_N, 0.0)
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    let top_lexical: HashSet<K> = top_k(lexical, FUSION_TOP_N, 0.0)
        .into_iter()
        .map(|(k, _)| k)
        .collect();

    let nlp_scores: HashMap<&K, f64> = nlp.iter().map(|(k, s)| (k, *s)).collect();
    let lexical_scores: HashMap<&K, f64> = lexical.iter().map(|(k, s)| (k, *s)).collect();

    let mut seen: HashSet<&K> = HashSet::new();
    let keys = nlp.iter().chain(lexical).map(|(k, _)| k);

    let mut fused = Vec::new();
    for key in keys {
        if !seen.insert(key) {
            continue;
        }

        let mut nlp_term = nlp_scores.get(key).copied().unwrap_or(NLP_MISSING_SCORE) * NLP_SCALE;
        if top_nlp.contains(key) {
            nlp_term *= nlp_term;
        }

        let mut lexical_term = match lexical_scores.get(key) {
            Some(score) if *score > 0.0 => *score,
            _ => LEXICAL_FLOOR,
        };
        if top_lexical.contains(key) && lexical_term >= LEXICAL_BOOST_MIN {
            lexical_term *= lexical_term;
        }

        fused.push((key.clone(), nlp_term * lexical_term));
    }
    fused
}

//! Hybrid Recommender.
//!
//! Scores free text against the services of a catalog snapshot using the
//! embedding collaborator, the lexical collaborator, or both fused.
//!
//! The query text is always embedded, even for lexical-only calls, because
//! service-class matching works on embeddings. The lexical collaborator is
//! asked for full-corpus scores and its hits are narrowed to the facet
//! candidates afterwards.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::error::MatchError;
use crate::domain::catalog::FacetCatalog;
use crate::domain::foundation::ServiceId;
use crate::domain::recommendation::{
    class_match_count, fuse, top_k, FacetFilter, FacetSelection, TextRecommender,
};
use crate::domain::service::{dot, CatalogSnapshot, Language, ServiceClassMatch, ServiceVector};
use crate::ports::{LexicalHit, LexicalSearch, TextVectorizer};

/// One free-text scoring request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextQuery {
    pub text: String,
    pub selection: FacetSelection,
    /// Narrow the service-class facet to the classes closest to the text.
    pub match_service_classes: bool,
    pub top_k: usize,
    pub score_threshold: f64,
    pub strategy: TextRecommender,
    pub language: Language,
}

pub struct HybridRecommender {
    vectorizer: Arc<dyn TextVectorizer>,
    lexical: Arc<dyn LexicalSearch>,
    catalog: FacetCatalog,
}

impl HybridRecommender {
    pub fn new(
        vectorizer: Arc<dyn TextVectorizer>,
        lexical: Arc<dyn LexicalSearch>,
        catalog: FacetCatalog,
    ) -> Self {
        Self {
            vectorizer,
            lexical,
            catalog,
        }
    }

    /// Ranked `(service id, score)` pairs, best first.
    pub async fn recommend_services(
        &self,
        snapshot: &CatalogSnapshot,
        query: &TextQuery,
    ) -> Result<Vec<(ServiceId, f64)>, MatchError> {
        let (embedding, hits) = if query.strategy.uses_lexical() {
            futures::try_join!(
                self.vectorizer.vectorize(&query.text),
                self.lexical.search(&query.text, query.language, 0),
            )?
        } else {
            (self.vectorizer.vectorize(&query.text).await?, Vec::new())
        };

        let filter = if query.match_service_classes {
            let classes = self.closest_classes(snapshot, &embedding, &query.selection)?;
            let selection = query.selection.clone().with_service_classes(classes);
            FacetFilter::new(&selection, &self.catalog)
        } else {
            FacetFilter::new(&query.selection, &self.catalog)
        };
        let candidates = filter.apply(snapshot.service_vectors());

        let ranked = match query.strategy {
            TextRecommender::Nlp => {
                let nlp = semantic_scores(&embedding, &candidates)?;
                top_k(&nlp, query.top_k, query.score_threshold)
            }
            TextRecommender::Lexical => {
                let lexical = lexical_scores(hits, &candidates);
                top_k(&lexical, query.top_k, query.score_threshold)
            }
            TextRecommender::All => {
                let nlp = semantic_scores(&embedding, &candidates)?;
                let lexical = lexical_scores(hits, &candidates);
                let fused = fuse(&nlp, &lexical);
                debug!(
                    nlp = nlp.len(),
                    lexical = lexical.len(),
                    fused = fused.len(),
                    "fused text scores"
                );
                top_k(&fused, query.top_k, query.score_threshold)
            }
        };

        debug!(
            strategy = %query.strategy,
            candidates = candidates.len(),
            returned = ranked.len(),
            "scored services"
        );
        Ok(ranked)
    }

    /// Service classes closest to `text`, best first.
    pub async fn recommend_service_classes(
        &self,
        snapshot: &CatalogSnapshot,
        text: &str,
        k: usize,
    ) -> Result<Vec<ServiceClassMatch>, MatchError> {
        let embedding = self.vectorizer.vectorize(text).await?;
        let scores = class_scores(snapshot, &embedding)?;

        Ok(top_k(&scores, k, 0.0)
            .into_iter()
            .map(|(index, score)| {
                let class = &snapshot.class_vectors()[index];
                ServiceClassMatch {
                    name: class.name.clone(),
                    service_class_code: class.code.clone(),
                    score,
                }
            })
            .collect())
    }

    /// The requested classes that are also among the best-scoring share of
    /// the taxonomy. An empty result leaves the class facet unrestricted.
    fn closest_classes(
        &self,
        snapshot: &CatalogSnapshot,
        embedding: &[f64],
        selection: &FacetSelection,
    ) -> Result<Vec<String>, MatchError> {
        let scores = class_scores(snapshot, embedding)?;
        let keep = class_match_count(self.catalog.service_class_count());
        let closest: HashSet<&str> = top_k(&scores, keep, 0.0)
            .into_iter()
            .map(|(index, _)| snapshot.class_vectors()[index].code.as_str())
            .collect();

        let requested = selection
            .service_classes
            .clone()
            .unwrap_or_else(|| self.catalog.service_class_codes());
        Ok(requested
            .into_iter()
            .filter(|code| closest.contains(code.as_str()))
            .collect())
    }
}

/// Class vector scores keyed by row index.
fn class_scores(snapshot: &CatalogSnapshot, embedding: &[f64]) -> Result<Vec<(usize, f64)>, MatchError> {
    snapshot
        .class_vectors()
        .iter()
        .enumerate()
        .map(|(index, class)| {
            same_dimensions(&class.code, &class.vector, embedding)?;
            Ok((index, dot(embedding, &class.vector)))
        })
        .collect()
}

fn semantic_scores(
    embedding: &[f64],
    candidates: &[&ServiceVector],
) -> Result<Vec<(ServiceId, f64)>, MatchError> {
    candidates
        .iter()
        .map(|row| {
            same_dimensions(row.id.as_str(), &row.vector, embedding)?;
            Ok((row.id.clone(), dot(embedding, &row.vector)))
        })
        .collect()
}

fn lexical_scores(
    hits: Vec<LexicalHit>,
    candidates: &[&ServiceVector],
) -> Vec<(ServiceId, f64)> {
    let allowed: HashSet<&ServiceId> = candidates.iter().map(|row| &row.id).collect();
    hits.into_iter()
        .filter(|hit| allowed.contains(&hit.id))
        .map(|hit| (hit.id, hit.score))
        .collect()
}

fn same_dimensions(owner: &str, stored: &[f64], embedding: &[f64]) -> Result<(), MatchError> {
    if stored.len() == embedding.len() {
        Ok(())
    } else {
        Err(MatchError::invariant(format!(
            "vector of {owner} has {} dimensions, query embedding has {}",
            stored.len(),
            embedding.len()
        )))
    }
}

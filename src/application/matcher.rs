//! Service Matcher.
//!
//! Entry point for every catalog read and recommendation request. Each
//! request takes the current snapshot once and serves from it to the end,
//! so a concurrent sync never mixes two catalogs within one response.
//!
//! Conversation requests commit to one mode per request:
//!
//! | Mode | Source of candidates |
//! |------|----------------------|
//! | search | hybrid scoring of the search form's text slot |
//! | conversation | hybrid scoring of all user messages |
//! | intent | intent mapping, then the category cascade |

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::context_loader::ConversationContextLoader;
use super::error::MatchError;
use super::queries::{
    ConversationRecommendQuery, FacetNames, IntentAndOptionsQuery, IntentQuery,
    RecommenderSettings, ScoringOptions, ServiceClassConversationQuery, ServiceClassRecommendQuery,
    ServiceQuery, ServiceRecommendQuery,
};
use super::recommender::{HybridRecommender, TextQuery};
use super::snapshot::{load_snapshot, SnapshotHandle};
use crate::domain::catalog::{
    life_events_from_intent, service_classes_from_intent, FacetCatalog, MunicipalityEntry,
    ServiceClass,
};
use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::{ConversationId, ServiceId};
use crate::domain::recommendation::{FacetFilter, FacetSelection, Priorization, ResolvedMode};
use crate::domain::service::{
    restrict_channel, restrict_service, CatalogSnapshot, Service, ServiceChannel,
    ServiceClassMatch, ServiceMatch,
};
use crate::ports::{DialogueStore, IntentMapping, LexicalSearch, ServiceRepository, TextVectorizer};

/// Row counts of a freshly published snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub service_vectors: usize,
    pub class_vectors: usize,
    pub translations: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SyncSummary {
    fn of(snapshot: &CatalogSnapshot) -> Self {
        Self {
            service_vectors: snapshot.service_vectors().len(),
            class_vectors: snapshot.class_vectors().len(),
            translations: snapshot.translations().len(),
            loaded_at: snapshot.loaded_at(),
        }
    }
}

/// Facet codes after resolution against the catalog.
#[derive(Debug, Clone)]
struct ResolvedFacets {
    municipality_ids: Vec<String>,
    life_events: Vec<String>,
    service_classes: Vec<String>,
}

impl ResolvedFacets {
    fn selection(&self) -> FacetSelection {
        FacetSelection::new(
            self.service_classes.clone(),
            self.municipality_ids.clone(),
            self.life_events.clone(),
        )
    }
}

pub struct ServiceMatcher {
    services: Arc<dyn ServiceRepository>,
    dialogue: Arc<dyn DialogueStore>,
    contexts: ConversationContextLoader,
    recommender: HybridRecommender,
    snapshot: SnapshotHandle,
    catalog: FacetCatalog,
    settings: RecommenderSettings,
}

impl ServiceMatcher {
    /// Creates a matcher serving an empty snapshot until the first [`sync`].
    ///
    /// [`sync`]: ServiceMatcher::sync
    pub fn new(
        services: Arc<dyn ServiceRepository>,
        dialogue: Arc<dyn DialogueStore>,
        vectorizer: Arc<dyn TextVectorizer>,
        lexical: Arc<dyn LexicalSearch>,
        settings: RecommenderSettings,
    ) -> Self {
        let catalog = FacetCatalog::standard();
        Self {
            services,
            contexts: ConversationContextLoader::new(Arc::clone(&dialogue)),
            dialogue,
            recommender: HybridRecommender::new(vectorizer, lexical, catalog),
            snapshot: SnapshotHandle::default(),
            catalog,
            settings,
        }
    }

    pub fn snapshot(&self) -> &SnapshotHandle {
        &self.snapshot
    }

    pub fn settings(&self) -> &RecommenderSettings {
        &self.settings
    }

    /// Reloads the snapshot from the repository and publishes it.
    pub async fn sync(&self) -> Result<SyncSummary, MatchError> {
        let snapshot = load_snapshot(self.services.as_ref()).await?;
        let summary = SyncSummary::of(&snapshot);
        self.snapshot.replace(snapshot).await;
        info!(
            service_vectors = summary.service_vectors,
            class_vectors = summary.class_vectors,
            "catalog snapshot published"
        );
        Ok(summary)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Catalog reads
    // ─────────────────────────────────────────────────────────────────────

    pub async fn service(&self, id: &ServiceId, translate: bool) -> Result<Option<Service>, MatchError> {
        let snapshot = self.snapshot.current().await;
        Ok(self
            .services
            .find_service(id)
            .await?
            .map(|service| prepare(service, translate, &snapshot)))
    }

    pub async fn all_services(&self, translate: bool) -> Result<Vec<Service>, MatchError> {
        let snapshot = self.snapshot.current().await;
        Ok(self
            .services
            .all_services()
            .await?
            .into_iter()
            .map(|service| prepare(service, translate, &snapshot))
            .collect())
    }

    pub async fn all_channels(&self) -> Result<Vec<ServiceChannel>, MatchError> {
        Ok(self.services.all_channels().await?)
    }

    /// Channels serving `id`: `None` for a service outside the snapshot,
    /// an empty list for an indexed service without channels.
    pub async fn channels_for_service(
        &self,
        id: &ServiceId,
    ) -> Result<Option<Vec<ServiceChannel>>, MatchError> {
        let channels = self
            .services
            .channels_for_services(std::slice::from_ref(id))
            .await?;
        if !channels.is_empty() {
            return Ok(Some(channels));
        }
        let known = self.snapshot.current().await.contains(id);
        Ok(known.then(Vec::new))
    }

    pub fn service_classes(&self) -> Vec<ServiceClass> {
        self.catalog.service_classes()
    }

    pub fn life_event_codes(&self) -> Vec<String> {
        self.catalog.life_event_codes()
    }

    pub fn municipalities(&self) -> &'static [MunicipalityEntry] {
        self.catalog.municipalities()
    }

    /// Catalog services passing the facet filter, locally or nationally
    /// relevant services first.
    pub async fn services_filtered(&self, query: &ServiceQuery) -> Result<Vec<ServiceMatch>, MatchError> {
        let snapshot = self.snapshot.current().await;
        self.filtered(&snapshot, query).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Recommendations
    // ─────────────────────────────────────────────────────────────────────

    pub async fn recommend(&self, query: &ServiceRecommendQuery) -> Result<Vec<ServiceMatch>, MatchError> {
        if query.need_text.is_empty() {
            return Ok(Vec::new());
        }
        let snapshot = self.snapshot.current().await;
        let facets = self.resolve(&query.facets);
        let scoring = self.settings.apply(&query.scoring);
        self.matching_services(
            &snapshot,
            &query.need_text,
            &facets,
            scoring,
            query.translate_missing_texts,
        )
        .await
    }

    pub async fn recommend_by_conversation(
        &self,
        id: &ConversationId,
        query: &ConversationRecommendQuery,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let context = self.contexts.load(id).await?;
        let snapshot = self.snapshot.current().await;
        let scoring = self.settings.apply(&query.scoring);
        let translate = query.translate_missing_texts;

        let municipalities = if query.facets.municipalities.is_empty() {
            context
                .municipality()
                .map(|name| vec![name.to_string()])
                .unwrap_or_default()
        } else {
            query.facets.municipalities.clone()
        };
        let facets = self.resolve(&FacetNames {
            municipalities: municipalities.clone(),
            life_events: non_empty_or(&query.facets.life_events, &context.life_events),
            service_classes: non_empty_or(&query.facets.service_classes, &context.service_classes),
        });

        let mode = query.mode.resolve(&context);
        debug!(conversation_id = %id, mode = %mode, "recommendation mode resolved");

        match mode {
            ResolvedMode::Search(Some(text)) => {
                self.matching_services(&snapshot, &text, &facets, scoring, translate)
                    .await
            }
            ResolvedMode::Search(None) => Ok(Vec::new()),
            ResolvedMode::Conversation => {
                let text = context.joined_messages();
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                self.matching_services(&snapshot, &text, &facets, scoring, translate)
                    .await
            }
            ResolvedMode::Intent => {
                self.intent_mode(&snapshot, &context, &municipalities, scoring, translate)
                    .await
            }
            ResolvedMode::Skip => {
                warn!(conversation_id = %id, "search form is active without search text");
                Ok(Vec::new())
            }
        }
    }

    pub async fn recommend_by_intent(&self, query: &IntentQuery) -> Result<Vec<ServiceMatch>, MatchError> {
        let snapshot = self.snapshot.current().await;
        let mapping = self.mapping_for(&query.intent).await?;
        self.by_intent(&snapshot, query, &mapping).await
    }

    pub async fn recommend_by_intent_and_options(
        &self,
        query: &IntentAndOptionsQuery,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let snapshot = self.snapshot.current().await;
        let mapping = self.mapping_for(&query.intent).await?;
        self.by_intent_and_options(&snapshot, query, &mapping).await
    }

    pub async fn recommend_service_classes(
        &self,
        query: &ServiceClassRecommendQuery,
    ) -> Result<Vec<ServiceClassMatch>, MatchError> {
        if query.need_text.is_empty() {
            return Ok(Vec::new());
        }
        let snapshot = self.snapshot.current().await;
        let k = query.top_k.unwrap_or(self.settings.top_k);
        self.recommender
            .recommend_service_classes(&snapshot, &query.need_text, k)
            .await
    }

    pub async fn recommend_service_classes_by_conversation(
        &self,
        id: &ConversationId,
        query: &ServiceClassConversationQuery,
    ) -> Result<Vec<ServiceClassMatch>, MatchError> {
        let text = self.contexts.load(id).await?.joined_messages();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let snapshot = self.snapshot.current().await;
        let k = query.top_k.unwrap_or(self.settings.top_k);
        self.recommender
            .recommend_service_classes(&snapshot, &text, k)
            .await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Request pipeline
    // ─────────────────────────────────────────────────────────────────────

    fn resolve(&self, names: &FacetNames) -> ResolvedFacets {
        ResolvedFacets {
            municipality_ids: self.catalog.resolve_municipalities(&names.municipalities),
            life_events: self.catalog.resolve_life_events(&names.life_events),
            service_classes: self.catalog.resolve_service_classes(&names.service_classes),
        }
    }

    /// The stored mapping, or an empty one for unmapped intents.
    async fn mapping_for(&self, intent: &str) -> Result<IntentMapping, MatchError> {
        Ok(self
            .dialogue
            .intent_mapping(intent)
            .await?
            .unwrap_or_else(|| IntentMapping::new(intent, Vec::new())))
    }

    /// Mapped service ids followed by resolved external ids, without repeats.
    async fn mapped_services(&self, mapping: &IntentMapping) -> Result<Vec<ServiceId>, MatchError> {
        let external = if mapping.ptv_services.is_empty() {
            Vec::new()
        } else {
            self.services.resolve_external_ids(&mapping.ptv_services).await?
        };
        let mut seen = HashSet::new();
        Ok(mapping
            .services
            .iter()
            .chain(&external)
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect())
    }

    /// Services and their channels, in the order of `ids`.
    async fn materialize(
        &self,
        snapshot: &CatalogSnapshot,
        ids: &[ServiceId],
        translate: bool,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let (services, channels) = futures::try_join!(
            self.services.services_by_ids(ids),
            self.services.channels_for_services(ids),
        )?;
        Ok(services
            .into_iter()
            .map(|service| {
                let served = channels
                    .iter()
                    .filter(|channel| channel.serves(&service.id))
                    .cloned()
                    .collect();
                ServiceMatch::new(prepare(service, translate, snapshot), served)
            })
            .collect())
    }

    async fn matching_services(
        &self,
        snapshot: &CatalogSnapshot,
        text: &str,
        facets: &ResolvedFacets,
        scoring: RecommenderSettings,
        translate: bool,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let query = TextQuery {
            text: text.to_string(),
            selection: facets.selection(),
            match_service_classes: false,
            top_k: scoring.top_k,
            score_threshold: scoring.score_threshold,
            strategy: scoring.strategy,
            language: scoring.language,
        };
        let ranked = self.recommender.recommend_services(snapshot, &query).await?;
        let ids: Vec<ServiceId> = ranked.iter().map(|(id, _)| id.clone()).collect();
        let scores: HashMap<&ServiceId, f64> = ranked.iter().map(|(id, score)| (id, *score)).collect();

        let matches = self.materialize(snapshot, &ids, translate).await?;
        Ok(localize(matches, &facets.municipality_ids)
            .into_iter()
            .map(|m| {
                let score = scores.get(&m.service.id).copied();
                ServiceMatch { score, ..m }
            })
            .collect())
    }

    async fn filtered(
        &self,
        snapshot: &CatalogSnapshot,
        query: &ServiceQuery,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let facets = self.resolve(&query.facets);
        let filter = FacetFilter::new(&facets.selection(), &self.catalog);
        let ids = filter.service_ids(snapshot.classifications());
        let matches = self
            .materialize(snapshot, &ids, query.translate_missing_texts)
            .await?;

        let (mut with_areas, mut without_areas): (Vec<_>, Vec<_>) =
            matches.into_iter().partition(|m| m.service.has_areas());
        with_areas.sort_by_key(|m| !m.service.has_service_classes());
        without_areas.sort_by_key(|m| !m.service.has_service_classes());

        let ordered = match query.priorization.unwrap_or_default() {
            Priorization::Local => {
                with_areas.into_iter().chain(without_areas)
            }
            Priorization::National => {
                without_areas.into_iter().chain(with_areas)
            }
        };
        let limit = query.limit_k.unwrap_or(self.settings.top_k);
        let listed: Vec<ServiceMatch> = ordered.take(limit).collect();
        debug!(
            unrestricted = filter.is_unrestricted(),
            filtered = ids.len(),
            listed = listed.len(),
            "catalog listing built"
        );

        if query.facets.municipalities.is_empty() {
            Ok(listed)
        } else {
            Ok(localize(listed, &facets.municipality_ids))
        }
    }

    /// Mapped services that pass the facet filter, in mapping order.
    async fn intent_matches(
        &self,
        snapshot: &CatalogSnapshot,
        mapped: &[ServiceId],
        facets: &ResolvedFacets,
        translate: bool,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        if mapped.is_empty() {
            return Ok(Vec::new());
        }
        let allowed: HashSet<ServiceId> = FacetFilter::new(&facets.selection(), &self.catalog)
            .service_ids(snapshot.classifications())
            .into_iter()
            .collect();
        let kept: Vec<ServiceId> = mapped.iter().filter(|id| allowed.contains(*id)).cloned().collect();
        let matches = self.materialize(snapshot, &kept, translate).await?;
        Ok(localize(matches, &facets.municipality_ids))
    }

    async fn by_intent(
        &self,
        snapshot: &CatalogSnapshot,
        query: &IntentQuery,
        mapping: &IntentMapping,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let mapped = self.mapped_services(mapping).await?;
        let facets = self.resolve(&query.facets);
        self.intent_matches(snapshot, &mapped, &facets, query.translate_missing_texts)
            .await
    }

    async fn by_intent_and_options(
        &self,
        snapshot: &CatalogSnapshot,
        query: &IntentAndOptionsQuery,
        mapping: &IntentMapping,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let translate = query.translate_missing_texts;
        let scoring = self.settings.apply(&query.scoring);
        let limit = query.limit_k.unwrap_or(self.settings.top_k);
        let mapped = self.mapped_services(mapping).await?;

        let text = query
            .need_text
            .clone()
            .filter(|text| !text.is_empty())
            .or_else(|| mapping.intent_text.clone());
        let requested_classes = if query.facets.service_classes.is_empty() {
            mapping.intent_service_classes.clone()
        } else {
            Some(query.facets.service_classes.clone())
        };
        let classes = self
            .catalog
            .resolve_service_classes(requested_classes.as_deref().unwrap_or_default());
        // Widening means nothing valid was requested.
        let use_class_filter = requested_classes
            .as_ref()
            .is_some_and(|requested| classes.len() <= requested.len());

        let intent_facets = ResolvedFacets {
            municipality_ids: self.catalog.resolve_municipalities(&query.facets.municipalities),
            life_events: self.catalog.resolve_life_events(&query.facets.life_events),
            service_classes: self.catalog.service_class_codes(),
        };
        let mut combined = self
            .intent_matches(snapshot, &mapped, &intent_facets, translate)
            .await?;
        let direct = combined.len();

        let extra = if let Some(text) = text {
            if text.is_empty() {
                Vec::new()
            } else {
                let text_facets = ResolvedFacets {
                    service_classes: if use_class_filter {
                        classes
                    } else {
                        intent_facets.service_classes.clone()
                    },
                    ..intent_facets.clone()
                };
                let scoring = RecommenderSettings {
                    top_k: limit + direct,
                    ..scoring
                };
                self.matching_services(snapshot, &text, &text_facets, scoring, translate)
                    .await?
            }
        } else if use_class_filter && !classes.is_empty() {
            let listing = ServiceQuery {
                facets: FacetNames {
                    municipalities: query.facets.municipalities.clone(),
                    life_events: intent_facets.life_events.clone(),
                    service_classes: classes,
                },
                priorization: Some(query.priorization.or_else(|| mapping.priorization()).unwrap_or_default()),
                limit_k: Some(limit + direct),
                translate_missing_texts: translate,
            };
            self.filtered(snapshot, &listing).await?
        } else {
            Vec::new()
        };

        combined.extend(
            extra
                .into_iter()
                .filter(|m| !mapped.contains(&m.service.id))
                .take(limit),
        );
        debug!(
            intent = %query.intent,
            direct,
            total = combined.len(),
            "intent matches topped up"
        );
        Ok(combined)
    }

    /// Intent lookup for the latest intent, then the category cascade.
    async fn intent_mode(
        &self,
        snapshot: &CatalogSnapshot,
        context: &ConversationContext,
        municipalities: &[String],
        scoring: RecommenderSettings,
        translate: bool,
    ) -> Result<Vec<ServiceMatch>, MatchError> {
        let facets = FacetNames::default().with_municipalities(municipalities.to_vec());

        if let Some(intent) = context.latest_intent() {
            let mapping = self.mapping_for(intent).await?;
            let mut matches = if mapping.has_options() {
                let query = IntentAndOptionsQuery {
                    intent: intent.to_string(),
                    facets: facets.clone(),
                    scoring: ScoringOptions {
                        score_threshold: Some(scoring.score_threshold),
                        ..ScoringOptions::default()
                    },
                    limit_k: Some(scoring.top_k),
                    translate_missing_texts: translate,
                    ..IntentAndOptionsQuery::default()
                };
                self.by_intent_and_options(snapshot, &query, &mapping).await?
            } else {
                let query = IntentQuery {
                    intent: intent.to_string(),
                    facets: facets.clone(),
                    translate_missing_texts: translate,
                };
                self.by_intent(snapshot, &query, &mapping).await?
            };
            matches.truncate(scoring.top_k);
            if !matches.is_empty() {
                return Ok(matches);
            }
        }

        // Life events only stop the walk; their catalog data is too sparse to list by.
        let classes = context
            .intents
            .iter()
            .rev()
            .find_map(|intent| {
                let classes = service_classes_from_intent(intent);
                if !classes.is_empty() {
                    Some(classes)
                } else if !life_events_from_intent(intent).is_empty() {
                    Some(Vec::new())
                } else {
                    None
                }
            })
            .unwrap_or_default();
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        debug!(classes = ?classes, "falling back to category listing");
        let listing = ServiceQuery {
            facets: facets.with_service_classes(classes),
            priorization: None,
            limit_k: Some(scoring.top_k),
            translate_missing_texts: translate,
        };
        self.filtered(snapshot, &listing).await
    }
}

/// Clears stale translation flags and optionally fills missing texts.
fn prepare(mut service: Service, translate: bool, snapshot: &CatalogSnapshot) -> Service {
    service.clear_translation_flags();
    if translate {
        snapshot.translations().fill_missing(&service)
    } else {
        service
    }
}

fn localize(matches: Vec<ServiceMatch>, municipality_ids: &[String]) -> Vec<ServiceMatch> {
    matches
        .into_iter()
        .map(|m| ServiceMatch {
            service: restrict_service(&m.service, municipality_ids),
            channels: m
                .channels
                .iter()
                .map(|channel| restrict_channel(channel, municipality_ids))
                .collect(),
            score: m.score,
        })
        .collect()
}

fn non_empty_or(preferred: &[String], fallback: &[String]) -> Vec<String> {
    if preferred.is_empty() {
        fallback.to_vec()
    } else {
        preferred.to_vec()
    }
}

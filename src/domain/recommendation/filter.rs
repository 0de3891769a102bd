//! Facet Filter.
//!
//! A facet restricts candidates only when its selection is a proper,
//! non-empty subset of the catalog: unset, empty and full-catalog
//! selections all mean "no restriction". A restricting facet keeps rows
//! whose own codes intersect the selection.

use std::collections::HashSet;

use crate::domain::catalog::FacetCatalog;
use crate::domain::foundation::ServiceId;
use crate::domain::service::{FacetCodes, Faceted};

/// Resolved facet codes requested for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub service_classes: Option<Vec<String>>,
    pub municipality_ids: Option<Vec<String>>,
    pub life_events: Option<Vec<String>>,
}

impl FacetSelection {
    pub fn new(
        service_classes: Vec<String>,
        municipality_ids: Vec<String>,
        life_events: Vec<String>,
    ) -> Self {
        Self {
            service_classes: Some(service_classes),
            municipality_ids: Some(municipality_ids),
            life_events: Some(life_events),
        }
    }

    pub fn with_service_classes(mut self, service_classes: Vec<String>) -> Self {
        self.service_classes = Some(service_classes);
        self
    }
}

/// Compiled facet restrictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetFilter {
    service_classes: Option<HashSet<String>>,
    municipalities: Option<HashSet<String>>,
    life_events: Option<HashSet<String>>,
}

impl FacetFilter {
    pub fn new(selection: &FacetSelection, catalog: &FacetCatalog) -> Self {
        Self {
            service_classes: restriction(
                selection.service_classes.as_deref(),
                catalog.service_class_count(),
            ),
            municipalities: restriction(
                selection.municipality_ids.as_deref(),
                catalog.municipality_count(),
            ),
            life_events: restriction(selection.life_events.as_deref(), catalog.life_event_count()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.service_classes.is_none() && self.municipalities.is_none() && self.life_events.is_none()
    }

    pub fn matches(&self, facets: &FacetCodes) -> bool {
        intersects(&self.service_classes, &facets.service_class_codes)
            && intersects(&self.municipalities, &facets.municipality_codes)
            && intersects(&self.life_events, &facets.life_event_codes)
    }

    /// Rows passing the filter, in input order.
    pub fn apply<'a, T: Faceted>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(row.facets())).collect()
    }

    /// Ids of rows passing the filter, in input order.
    pub fn service_ids<T: Faceted>(&self, rows: &[T]) -> Vec<ServiceId> {
        self.apply(rows)
            .into_iter()
            .map(|row| row.service_id().clone())
            .collect()
    }
}

fn restriction(selection: Option<&[String]>, catalog_size: usize) -> Option<HashSet<String>> {
    match selection {
        Some(codes) if !codes.is_empty() && codes.len() < catalog_size => {
            Some(codes.iter().cloned().collect())
        }
        _ => None,
    }
}

fn intersects(restriction: &Option<HashSet<String>>, codes: &[String]) -> bool {
    match restriction {
        None => true,
        Some(allowed) => codes.iter().any(|code| allowed.contains(code)),
    }
}

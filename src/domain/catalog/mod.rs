//! Facet Catalog - static reference data for the three filter dimensions.
//!
//! The catalog is loaded once and never changes for the process lifetime.
//! Facet resolution turns caller-supplied names and codes into filter sets:
//! unknown values are dropped, and a set that ends up empty is widened to
//! the whole catalog so that it means "no restriction".

mod codes;
mod reference_data;

pub use codes::{life_events_from_intent, service_classes_from_intent};
pub use reference_data::{LIFE_EVENT_CODES, MUNICIPALITIES, SERVICE_CLASSES};

use serde::{Deserialize, Serialize};

/// Province/region codes whose area records are always kept when content
/// is filtered by municipality.
pub const PROVINCE_CODES: &[&str] = &["02"];

/// A service class taxonomy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceClassEntry {
    pub code: &'static str,
    pub name: &'static str,
}

impl ServiceClassEntry {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// A municipality with its names in the three service languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MunicipalityEntry {
    pub id: &'static str,
    pub name_fi: &'static str,
    pub name_sv: &'static str,
    pub name_en: &'static str,
}

impl MunicipalityEntry {
    pub const fn new(
        id: &'static str,
        name_fi: &'static str,
        name_sv: &'static str,
        name_en: &'static str,
    ) -> Self {
        Self {
            id,
            name_fi,
            name_sv,
            name_en,
        }
    }

    /// True if `name` equals any of the localized names, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        [self.name_fi, self.name_sv, self.name_en]
            .iter()
            .any(|n| n.to_lowercase() == lowered)
    }
}

/// Owned service class record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClass {
    pub name: String,
    pub code: String,
}

/// Read-only facet catalog.
#[derive(Debug, Clone, Copy)]
pub struct FacetCatalog {
    service_classes: &'static [ServiceClassEntry],
    life_events: &'static [&'static str],
    municipalities: &'static [MunicipalityEntry],
}

impl Default for FacetCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl FacetCatalog {
    /// The production catalog.
    pub fn standard() -> Self {
        Self::new(SERVICE_CLASSES, LIFE_EVENT_CODES, MUNICIPALITIES)
    }

    /// Creates a catalog over custom reference slices.
    pub fn new(
        service_classes: &'static [ServiceClassEntry],
        life_events: &'static [&'static str],
        municipalities: &'static [MunicipalityEntry],
    ) -> Self {
        Self {
            service_classes,
            life_events,
            municipalities,
        }
    }

    pub fn service_class_count(&self) -> usize {
        self.service_classes.len()
    }

    pub fn life_event_count(&self) -> usize {
        self.life_events.len()
    }

    pub fn municipality_count(&self) -> usize {
        self.municipalities.len()
    }

    /// All service classes as owned records, in taxonomy order.
    pub fn service_classes(&self) -> Vec<ServiceClass> {
        self.service_classes
            .iter()
            .map(|sc| ServiceClass {
                name: sc.name.to_string(),
                code: sc.code.to_string(),
            })
            .collect()
    }

    pub fn service_class_codes(&self) -> Vec<String> {
        self.service_classes
            .iter()
            .map(|sc| sc.code.to_string())
            .collect()
    }

    pub fn life_event_codes(&self) -> Vec<String> {
        self.life_events.iter().map(|le| le.to_string()).collect()
    }

    pub fn municipalities(&self) -> &'static [MunicipalityEntry] {
        self.municipalities
    }

    pub fn municipality_ids(&self) -> Vec<String> {
        self.municipalities.iter().map(|m| m.id.to_string()).collect()
    }

    /// Maps municipality names (any language, case-insensitive) to ids.
    ///
    /// Unknown names are dropped; if nothing matches, every municipality
    /// id is returned.
    pub fn resolve_municipalities(&self, names: &[String]) -> Vec<String> {
        let matching: Vec<String> = self
            .municipalities
            .iter()
            .filter(|m| names.iter().any(|name| m.is_named(name)))
            .map(|m| m.id.to_string())
            .collect();

        if matching.is_empty() {
            self.municipality_ids()
        } else {
            matching
        }
    }

    /// Keeps the known life-event codes, widening to all codes if none remain.
    pub fn resolve_life_events(&self, codes: &[String]) -> Vec<String> {
        let known: Vec<String> = codes
            .iter()
            .filter(|code| self.life_events.contains(&code.as_str()))
            .cloned()
            .collect();

        if known.is_empty() {
            self.life_event_codes()
        } else {
            known
        }
    }

    /// Keeps the known service-class codes, widening to all codes if none remain.
    pub fn resolve_service_classes(&self, codes: &[String]) -> Vec<String> {
        let known: Vec<String> = codes
            .iter()
            .filter(|code| self.service_classes.iter().any(|sc| sc.code == code.as_str()))
            .cloned()
            .collect();

        if known.is_empty() {
            self.service_class_codes()
        } else {
            known
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn standard_catalog_sizes() {
        let catalog = FacetCatalog::standard();
        assert_eq!(catalog.service_class_count(), 226);
        assert_eq!(catalog.life_event_count(), 19);
        assert_eq!(catalog.municipality_count(), 27);
    }

    #[test]
    fn municipality_names_resolve_in_any_language() {
        let catalog = FacetCatalog::standard();
        assert_eq!(catalog.resolve_municipalities(&strings(&["Turku"])), vec!["853"]);
        assert_eq!(catalog.resolve_municipalities(&strings(&["åbo"])), vec!["853"]);
        assert_eq!(
            catalog.resolve_municipalities(&strings(&["Naantali", "Raisio"])),
            vec!["529", "680"]
        );
    }

    #[test]
    fn unknown_municipalities_widen_to_all() {
        let catalog = FacetCatalog::standard();
        assert_eq!(catalog.resolve_municipalities(&strings(&["Helsinki"])).len(), 27);
        assert_eq!(catalog.resolve_municipalities(&[]).len(), 27);
    }

    #[test]
    fn life_events_keep_known_codes() {
        let catalog = FacetCatalog::standard();
        assert_eq!(catalog.resolve_life_events(&strings(&["KE4"])), vec!["KE4"]);
    }

    #[test]
    fn empty_or_unknown_life_events_resolve_to_full_catalog() {
        let catalog = FacetCatalog::standard();
        let widened = catalog.resolve_life_events(&strings(&["KE100"]));
        assert_eq!(widened.len(), 19);
        assert_eq!(widened[0], "KE1");
        assert_eq!(catalog.resolve_life_events(&[]).len(), 19);
    }

    #[test]
    fn service_classes_drop_unknown_codes() {
        let catalog = FacetCatalog::standard();
        assert_eq!(catalog.resolve_service_classes(&strings(&["P20.1"])), vec!["P20.1"]);
        assert_eq!(
            catalog.resolve_service_classes(&strings(&["P20.1", "nonsense"])),
            vec!["P20.1"]
        );
        assert_eq!(catalog.resolve_service_classes(&strings(&["P20.1", "P19"])).len(), 2);
        assert_eq!(catalog.resolve_service_classes(&[]).len(), 226);
        assert_eq!(catalog.resolve_service_classes(&strings(&["nonsense"])).len(), 226);
    }
}

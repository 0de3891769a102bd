//! Facet codes embedded in intent names.
//!
//! Dialogue intents are named after the taxonomy they serve, e.g.
//! `p12_P4.12_asd` or `ke6_moving`. Matching is case-insensitive and the
//! result is upper-cased and de-duplicated in first-seen order.

use once_cell::sync::Lazy;
use regex::Regex;

static SERVICE_CLASS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)p\d{1,2}(?:\.\d{1,2})?").expect("valid service class regex"));

static LIFE_EVENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ke\d{1,2}(?:\.\d{1,2})?").expect("valid life event regex"));

/// Service class codes (`P…`) found in an intent name.
pub fn service_classes_from_intent(intent: &str) -> Vec<String> {
    collect_codes(&SERVICE_CLASS_PATTERN, intent)
}

/// Life event codes (`KE…`) found in an intent name.
pub fn life_events_from_intent(intent: &str) -> Vec<String> {
    collect_codes(&LIFE_EVENT_PATTERN, intent)
}

fn collect_codes(pattern: &Regex, intent: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for found in pattern.find_iter(intent) {
        let code = found.as_str().to_uppercase();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn service_classes_are_extracted_case_insensitively() {
        assert_eq!(service_classes_from_intent("p12_asd"), vec!["P12"]);
        assert_eq!(
            sorted(service_classes_from_intent("p12_P4.12_asd")),
            vec!["P12", "P4.12"]
        );
    }

    #[test]
    fn service_classes_are_deduplicated() {
        assert_eq!(
            sorted(service_classes_from_intent("p12_P4.12_P12_asd")),
            vec!["P12", "P4.12"]
        );
    }

    #[test]
    fn names_without_codes_yield_nothing() {
        assert!(service_classes_from_intent("asd").is_empty());
        assert!(service_classes_from_intent("ke1_asd").is_empty());
        assert!(service_classes_from_intent("sports_service_search").is_empty());
        assert!(life_events_from_intent("asd").is_empty());
        assert!(life_events_from_intent("p1_asd").is_empty());
    }

    #[test]
    fn life_events_are_extracted_and_deduplicated() {
        assert_eq!(life_events_from_intent("ke4_asd"), vec!["KE4"]);
        assert_eq!(
            sorted(life_events_from_intent("ke4_KE5.5_asd")),
            vec!["KE4", "KE5.5"]
        );
        assert_eq!(
            sorted(life_events_from_intent("ke4_KE5.5_KE4_asd")),
            vec!["KE4", "KE5.5"]
        );
    }
}

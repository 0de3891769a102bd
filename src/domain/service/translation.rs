//! Machine translations of Finnish service texts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::localized::Language;
use super::model::{Description, Service, TRANSLATABLE_DESCRIPTION_TYPES};

/// One stored translation as written by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub target_text: String,
}

/// Finnish source text to English/Swedish target text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    en: HashMap<String, String>,
    sv: HashMap<String, String>,
}

impl TranslationTable {
    /// Builds the table, ignoring records that do not translate from Finnish
    /// into a served target language.
    pub fn from_records(records: impl IntoIterator<Item = TranslationRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            if record.source_language != "fi" {
                continue;
            }
            let target = match record.target_language.as_str() {
                "en" => &mut table.en,
                "sv" => &mut table.sv,
                _ => continue,
            };
            target.insert(record.source_text, record.target_text);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.en.len() + self.sv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn translate(&self, target: Language, source_text: &str) -> Option<&str> {
        let map = match target {
            Language::En => &self.en,
            Language::Sv => &self.sv,
            Language::Fi => return None,
        };
        map.get(source_text).map(String::as_str)
    }

    /// Returns a copy of `service` with missing English and Swedish texts
    /// filled from their Finnish originals.
    ///
    /// A missing name is always flagged as auto-translated, even when the
    /// table has no entry for it. Descriptions are filled per type, and only
    /// when the target language has no text of that type at all.
    pub fn fill_missing(&self, service: &Service) -> Service {
        let mut filled = service.clone();
        for language in [Language::En, Language::Sv] {
            let has_name = filled
                .name
                .get(language)
                .as_deref()
                .is_some_and(|name| !name.is_empty());
            if !has_name {
                let translated = filled
                    .name
                    .fi
                    .as_deref()
                    .and_then(|fi| self.translate(language, fi))
                    .map(str::to_string);
                *filled.name.get_mut(language) = translated;
                *filled.name_auto_translated.get_mut(language) = true;
            }

            for kind in TRANSLATABLE_DESCRIPTION_TYPES {
                let present = filled
                    .descriptions
                    .get(language)
                    .iter()
                    .any(|d| d.kind == kind && d.value.is_some());
                if present {
                    continue;
                }
                let additions: Vec<Description> = filled
                    .descriptions
                    .fi
                    .iter()
                    .filter(|d| d.kind == kind)
                    .filter_map(|d| d.value.as_deref())
                    .filter_map(|fi| self.translate(language, fi))
                    .map(|text| Description {
                        auto_translated: true,
                        ..Description::new(kind, text)
                    })
                    .collect();
                filled.descriptions.get_mut(language).extend(additions);
            }
        }
        filled
    }
}

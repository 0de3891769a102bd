//! Language-keyed values.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Content languages served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fi,
    En,
    Sv,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fi, Language::En, Language::Sv];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fi => "fi",
            Language::En => "en",
            Language::Sv => "sv",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per content language, serialized as `{"fi":…,"en":…,"sv":…}`.
///
/// Missing and `null` language entries deserialize to `T::default()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Default + Deserialize<'de>"))]
pub struct Localized<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fi: T,
    #[serde(default, deserialize_with = "null_as_default")]
    pub en: T,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sv: T,
}

impl<T> Localized<T> {
    pub fn new(fi: T, en: T, sv: T) -> Self {
        Self { fi, en, sv }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Fi => &self.fi,
            Language::En => &self.en,
            Language::Sv => &self.sv,
        }
    }

    pub fn get_mut(&mut self, language: Language) -> &mut T {
        match language {
            Language::Fi => &mut self.fi,
            Language::En => &mut self.en,
            Language::Sv => &mut self.sv,
        }
    }
}

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

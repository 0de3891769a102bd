//! Service catalog documents.
//!
//! Documents are produced by the ingestion pipeline and are read-only here.
//! Only the fields the matcher inspects are typed; everything else is kept
//! in `extra` and passed through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::localized::{null_as_default, Language, Localized};
use crate::domain::foundation::ServiceId;

/// Description kinds that are filled from Finnish when a translation is requested.
pub const TRANSLATABLE_DESCRIPTION_TYPES: [&str; 4] =
    ["Description", "GD_Description", "Summary", "GD_Summary"];

/// A public service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,

    #[serde(default)]
    pub ptv_id: Option<String>,

    #[serde(default, rename = "type")]
    pub service_type: Option<String>,

    #[serde(default)]
    pub subtype: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub organizations: Vec<Value>,

    #[serde(default)]
    pub name: Localized<Option<String>>,

    #[serde(default)]
    pub descriptions: Localized<Vec<Description>>,

    #[serde(default)]
    pub service_classes: Localized<Vec<Value>>,

    #[serde(default)]
    pub life_events: Localized<Vec<Value>>,

    #[serde(default)]
    pub areas: Localized<Vec<Area>>,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub name_auto_translated: Localized<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    /// Creates a bare service with only an id, used by builders and tests.
    pub fn new(id: ServiceId) -> Self {
        Self {
            id,
            ptv_id: None,
            service_type: None,
            subtype: None,
            organizations: Vec::new(),
            name: Localized::default(),
            descriptions: Localized::default(),
            service_classes: Localized::default(),
            life_events: Localized::default(),
            areas: Localized::default(),
            last_updated: None,
            name_auto_translated: Localized::default(),
            extra: Map::new(),
        }
    }

    /// True if the Finnish content lists at least one area.
    pub fn has_areas(&self) -> bool {
        !self.areas.fi.is_empty()
    }

    /// True if the Finnish content lists at least one service class.
    pub fn has_service_classes(&self) -> bool {
        !self.service_classes.fi.is_empty()
    }

    /// Resets every auto-translation indicator to false.
    pub fn clear_translation_flags(&mut self) {
        self.name_auto_translated = Localized::default();
        for language in Language::ALL {
            for description in self.descriptions.get_mut(language) {
                description.auto_translated = false;
            }
        }
    }
}

/// A typed description text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    #[serde(default)]
    pub value: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub auto_translated: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Description {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            kind: kind.into(),
            auto_translated: false,
            extra: Map::new(),
        }
    }
}

/// Kind of an area record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Municipality,
    Province,
    Region,
    Other,
}

/// An area where a service or channel is offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, rename = "type")]
    pub area_type: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Area {
    pub fn new(area_type: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            area_type: Some(area_type.into()),
            code: Some(code.into()),
            extra: Map::new(),
        }
    }

    pub fn kind(&self) -> AreaKind {
        match self.area_type.as_deref() {
            Some("Municipality") => AreaKind::Municipality,
            Some("Province") => AreaKind::Province,
            Some("Region") => AreaKind::Region,
            _ => AreaKind::Other,
        }
    }

    /// True if the area code is one of `codes`.
    pub fn code_in(&self, codes: &[impl AsRef<str>]) -> bool {
        self.code
            .as_deref()
            .is_some_and(|code| codes.iter().any(|c| c.as_ref() == code))
    }
}

/// A channel (web page, office, phone line…) through which services are delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChannel {
    pub id: String,

    #[serde(default)]
    pub ptv_id: Option<String>,

    #[serde(default, rename = "type")]
    pub channel_type: Option<String>,

    #[serde(default)]
    pub area_type: Option<String>,

    #[serde(default)]
    pub organization_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub service_ids: Vec<ServiceId>,

    #[serde(default)]
    pub name: Localized<Option<String>>,

    #[serde(default)]
    pub areas: Localized<Vec<Area>>,

    #[serde(default)]
    pub addresses: Localized<Vec<Address>>,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceChannel {
    pub fn new(id: impl Into<String>, service_ids: Vec<ServiceId>) -> Self {
        Self {
            id: id.into(),
            ptv_id: None,
            channel_type: None,
            area_type: None,
            organization_id: None,
            service_ids,
            name: Localized::default(),
            areas: Localized::default(),
            addresses: Localized::default(),
            last_updated: None,
            extra: Map::new(),
        }
    }

    pub fn serves(&self, service_id: &ServiceId) -> bool {
        self.service_ids.contains(service_id)
    }
}

/// A postal or visiting address of a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub municipality_code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    pub fn new(municipality_code: Option<&str>) -> Self {
        Self {
            municipality_code: municipality_code.map(str::to_string),
            extra: Map::new(),
        }
    }
}

//! Municipality-scoped content filtering.
//!
//! Applied to every returned service and channel once the caller has
//! narrowed the request to a set of municipalities. Area lists are rebuilt
//! as: matching municipalities, then served provinces/regions, then every
//! other area type.

use super::localized::Language;
use super::model::{Address, Area, AreaKind, Service, ServiceChannel};
use crate::domain::catalog::PROVINCE_CODES;

/// Returns a copy of `service` whose areas are restricted to `municipality_ids`.
pub fn restrict_service(service: &Service, municipality_ids: &[String]) -> Service {
    let mut restricted = service.clone();
    for language in Language::ALL {
        let areas = restricted.areas.get_mut(language);
        if !areas.is_empty() {
            *areas = restrict_areas(areas, municipality_ids);
        }
    }
    restricted
}

/// Returns a copy of `channel` restricted to `municipality_ids`.
///
/// Addresses without a municipality code are always kept.
pub fn restrict_channel(channel: &ServiceChannel, municipality_ids: &[String]) -> ServiceChannel {
    let mut restricted = channel.clone();
    for language in Language::ALL {
        let areas = restricted.areas.get_mut(language);
        if !areas.is_empty() {
            *areas = restrict_areas(areas, municipality_ids);
        }
        let addresses = restricted.addresses.get_mut(language);
        addresses.retain(|address| address_in(address, municipality_ids));
    }
    restricted
}

fn restrict_areas(areas: &[Area], municipality_ids: &[String]) -> Vec<Area> {
    let municipalities = areas
        .iter()
        .filter(|a| a.kind() == AreaKind::Municipality && a.code_in(municipality_ids));
    let provinces = areas.iter().filter(|a| {
        matches!(a.kind(), AreaKind::Province | AreaKind::Region) && a.code_in(PROVINCE_CODES)
    });
    let others = areas.iter().filter(|a| a.kind() == AreaKind::Other);

    municipalities.chain(provinces).chain(others).cloned().collect()
}

fn address_in(address: &Address, municipality_ids: &[String]) -> bool {
    match address.municipality_code.as_deref() {
        None => true,
        Some(code) => municipality_ids.iter().any(|id| id == code),
    }
}

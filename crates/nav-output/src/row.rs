//! Plain data rows written by listing backends.

use nav_catalog::{Building, BuildingCatalog};
use nav_core::DistanceUnit;

/// One line of the building listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    /// 1-based position in the distance ranking.
    pub rank:           u32,
    pub building_id:    i64,
    pub name:           String,
    pub distance:       f64,
    pub unit:           DistanceUnit,
    pub lat:            f64,
    pub lon:            f64,
    pub object_scale_m: f64,
    pub height_m:       f64,
}

impl ListingRow {
    pub fn from_building(rank: u32, b: &Building) -> Self {
        Self {
            rank,
            building_id:    b.id.0,
            name:           b.name.clone(),
            distance:       b.distance,
            unit:           b.unit,
            lat:            b.centroid.lat,
            lon:            b.centroid.lon,
            object_scale_m: b.object_scale(),
            height_m:       b.height_m,
        }
    }
}

/// Flatten the catalog's current ranking into rows, nearest first.
pub fn listing_rows(catalog: &BuildingCatalog) -> Vec<ListingRow> {
    catalog
        .ranked()
        .enumerate()
        .map(|(i, b)| ListingRow::from_building(i as u32 + 1, b))
        .collect()
}

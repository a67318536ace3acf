//! Resolving one Overpass way into a positioned, sized [`Building`].

use log::{debug, warn};
use rustc_hash::FxHashMap;

use nav_core::footprint::{footprint_estimate, footprint_estimate_rounded};
use nav_core::{BoundaryRing, BuildingId, DistanceUnit, FootprintEstimate, GeoPoint, OsmNodeId, round_to};
use nav_osm::Element;

use crate::{CatalogConfig, CatalogError, CatalogResult};

/// A building outline with everything the listing and the AR placement need.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    /// Value of the `building=*` tag, if any.
    pub kind: Option<String>,
    pub ring: BoundaryRing,
    pub centroid: GeoPoint,
    pub footprint: FootprintEstimate,
    /// Height above ground in metres, from `building:levels`.  0 when untagged.
    pub height_m: f64,
    /// Distance from the origin the catalog was ranked against, in `unit`.
    pub distance: f64,
    pub unit: DistanceUnit,
}

impl Building {
    #[inline]
    pub fn object_scale(&self) -> f64 {
        self.footprint.object_scale()
    }

    /// Recompute `distance` from a new origin.
    pub fn update_distance(&mut self, origin: GeoPoint, config: &CatalogConfig) {
        self.unit = config.unit;
        self.distance = ranked_distance(origin, self.centroid, config);
    }
}

/// Resolve `way` into a [`Building`] relative to `origin`.
///
/// Outline refs missing from `nodes` are skipped.  A closed OSM way repeats
/// its first node at the end; that duplicate is dropped so the ring's closing
/// edge is implicit and the edge parity matches the outline.
///
/// # Errors
///
/// [`CatalogError::NoGeometry`] when no ref resolves,
/// [`CatalogError::InvalidLevels`] when `building:levels` is not a number.
pub fn resolve_building(
    way:    &Element,
    nodes:  &FxHashMap<OsmNodeId, GeoPoint>,
    origin: GeoPoint,
    config: &CatalogConfig,
) -> CatalogResult<Building> {
    let id = BuildingId(way.id);

    let mut refs: &[i64] = &way.nodes;
    if refs.len() > 1 && refs.first() == refs.last() {
        refs = &refs[..refs.len() - 1];
    }

    let mut ring = BoundaryRing::default();
    let mut missing = 0usize;
    for &node in refs {
        match nodes.get(&OsmNodeId(node)) {
            Some(&p) => ring.push(p),
            None => missing += 1,
        }
    }
    if missing > 0 {
        warn!("{id}: {missing} of {} outline nodes have no coordinates", refs.len());
    }

    let centroid = ring.centroid().ok_or(CatalogError::NoGeometry(id))?;

    let footprint = match config.edge_decimals {
        Some(decimals) => footprint_estimate_rounded(&ring, decimals),
        None => footprint_estimate(&ring),
    };

    let tags = way.tags.as_ref();
    let height_m = match tags.and_then(|t| t.building_levels.as_deref()) {
        Some(raw) => parse_levels(id, raw)? * config.meters_per_level,
        None => {
            debug!("{id}: no building:levels tag, height 0");
            0.0
        }
    };

    let name = tags
        .and_then(|t| t.name.clone().or_else(|| t.addr_housename.clone()))
        .unwrap_or_else(|| format!("way {}", way.id));

    Ok(Building {
        id,
        name,
        kind: tags.and_then(|t| t.building.clone()),
        ring,
        centroid,
        footprint,
        height_m,
        distance: ranked_distance(origin, centroid, config),
        unit: config.unit,
    })
}

fn ranked_distance(origin: GeoPoint, centroid: GeoPoint, config: &CatalogConfig) -> f64 {
    round_to(origin.distance(centroid, config.unit), config.distance_decimals)
}

/// `building:levels` is free text in OSM.  Whole and fractional storey
/// counts are accepted; anything else is an error.
fn parse_levels(id: BuildingId, raw: &str) -> CatalogResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(levels) if levels.is_finite() && levels >= 0.0 => Ok(levels),
        _ => Err(CatalogError::InvalidLevels { id, value: raw.to_owned() }),
    }
}

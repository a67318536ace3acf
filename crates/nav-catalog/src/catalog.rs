//! Building catalog: distance ranking plus a spatial index.
//!
//! # Layout
//!
//! Buildings are stored once, in the order their ways appeared in the
//! Overpass response.  `order` holds indices into that vec sorted by
//! ascending distance; re-ranking for a new location only re-sorts `order`,
//! so the R-tree (which stores the same indices) never needs rebuilding.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over building centroids in `[lat, lon]` space
//! answers "which building is closest to this point" and radius queries.
//! Degree-space distance is only used to shortlist candidates; results are
//! ordered by haversine distance.  A radius query covers the spherical cap
//! around the point, split into two boxes when it crosses the ±180°
//! meridian.

use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use nav_core::{BuildingId, DistanceUnit, GeoPoint, LocationProvider};
use nav_osm::{OverpassResponse, parse_file};

use crate::{Building, CatalogConfig, CatalogError, CatalogResult, NavTarget, resolve_building};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct CentroidEntry {
    point: [f64; 2], // [lat, lon]
    idx: usize,
}

impl RTreeObject for CentroidEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CentroidEntry {
    /// Squared Euclidean distance in lat/lon space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── BuildingCatalog ───────────────────────────────────────────────────────────

pub struct BuildingCatalog {
    buildings: Vec<Building>,
    order: Vec<usize>,
    by_id: FxHashMap<BuildingId, usize>,
    spatial_idx: RTree<CentroidEntry>,
    config: CatalogConfig,
}

impl BuildingCatalog {
    /// Resolve every way in `ways` against the node coordinates in `nodes`
    /// and rank them by distance from `location`.
    ///
    /// Buildings that fail to resolve are logged and left out; the catalog
    /// itself only fails on an invalid `config`.
    pub fn build(
        ways:     &OverpassResponse,
        nodes:    &OverpassResponse,
        location: &dyn LocationProvider,
        config:   CatalogConfig,
    ) -> CatalogResult<Self> {
        config.validate()?;

        let origin = location.current_location();
        let positions = nodes.node_positions();
        let way_elems: Vec<_> = ways.ways().collect();

        let resolved: Vec<CatalogResult<Building>> = way_elems
            .par_iter()
            .map(|way| resolve_building(way, &positions, origin, &config))
            .collect();

        let mut buildings = Vec::with_capacity(resolved.len());
        for result in resolved {
            match result {
                Ok(b) => buildings.push(b),
                Err(e) => warn!("skipping building: {e}"),
            }
        }
        info!(
            "resolved {} of {} buildings around {origin}",
            buildings.len(),
            way_elems.len()
        );

        Ok(Self::from_buildings(buildings, config))
    }

    /// Like [`build`](Self::build) but reads both responses from saved
    /// Overpass JSON files.
    pub fn from_files(
        ways_path:  &Path,
        nodes_path: &Path,
        location:   &dyn LocationProvider,
        config:     CatalogConfig,
    ) -> CatalogResult<Self> {
        let ways = parse_file(ways_path)?;
        let nodes = parse_file(nodes_path)?;
        Self::build(&ways, &nodes, location, config)
    }

    /// Build a catalog from already-resolved buildings.
    ///
    /// A later duplicate id shadows an earlier one in [`get`](Self::get) but
    /// both stay in the ranking.
    pub fn from_buildings(buildings: Vec<Building>, config: CatalogConfig) -> Self {
        let by_id = buildings.iter().enumerate().map(|(i, b)| (b.id, i)).collect();

        let entries: Vec<CentroidEntry> = buildings
            .iter()
            .enumerate()
            .map(|(idx, b)| CentroidEntry { point: [b.centroid.lat, b.centroid.lon], idx })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut catalog = Self {
            order: (0..buildings.len()).collect(),
            buildings,
            by_id,
            spatial_idx,
            config,
        };
        catalog.sort_order();
        catalog
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Buildings by ascending distance.  Equal distances keep response order.
    pub fn ranked(&self) -> impl ExactSizeIterator<Item = &Building> + '_ {
        self.order.iter().map(|&i| &self.buildings[i])
    }

    pub fn get(&self, id: BuildingId) -> Option<&Building> {
        self.by_id.get(&id).map(|&i| &self.buildings[i])
    }

    /// Recompute every distance from the provider's current location and
    /// re-sort.
    pub fn rerank(&mut self, location: &dyn LocationProvider) {
        let origin = location.current_location();
        let config = &self.config;
        self.buildings
            .par_iter_mut()
            .for_each(|b| b.update_distance(origin, config));
        self.sort_order();
    }

    /// Building whose centroid is nearest to `point`, `None` when empty.
    pub fn nearest(&self, point: GeoPoint) -> Option<&Building> {
        // The degree-space nearest bounds the answer; the true nearest lies in
        // the cap of that radius.
        let first = self.spatial_idx.nearest_neighbor_iter(&[point.lat, point.lon]).next()?;
        let first = &self.buildings[first.idx];
        let bound = point.distance_m(first.centroid);
        if !bound.is_finite() {
            return Some(first);
        }
        self.candidates(point, bound)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, b)| b)
            .or(Some(first))
    }

    /// Buildings whose centroid lies within `radius_m` metres of `point`,
    /// nearest first.
    pub fn within(&self, point: GeoPoint, radius_m: f64) -> Vec<&Building> {
        if radius_m.is_nan() || radius_m < 0.0 {
            return Vec::new();
        }
        let mut hits: Vec<(f64, &Building)> = self.candidates(point, radius_m).collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, b)| b).collect()
    }

    /// Buildings within `radius_m` of `point`, paired with their distance.
    fn candidates(
        &self,
        point: GeoPoint,
        radius_m: f64,
    ) -> impl Iterator<Item = (f64, &Building)> + '_ {
        search_boxes(point, radius_m)
            .into_iter()
            .flat_map(move |envelope| self.spatial_idx.locate_in_envelope(&envelope))
            .map(move |e| {
                let b = &self.buildings[e.idx];
                (point.distance_m(b.centroid), b)
            })
            .filter(move |(d, _)| *d <= radius_m)
    }

    /// Navigation target for the building with `id`.
    pub fn select(&self, id: BuildingId) -> Option<NavTarget> {
        self.get(id).map(NavTarget::from)
    }

    /// Like [`select`](Self::select) but reports an unknown id as an error.
    pub fn require(&self, id: BuildingId) -> CatalogResult<NavTarget> {
        self.select(id)
            .ok_or(CatalogError::UnknownBuilding(id))
    }

    fn sort_order(&mut self) {
        let buildings = &self.buildings;
        self.order
            .sort_by(|&a, &b| buildings[a].distance.total_cmp(&buildings[b].distance));
    }
}

/// Lat/lon boxes covering every point within `radius_m` of `point`.
///
/// The longitude half-width of a cap with angular radius `δ` centred at
/// latitude `φ` is `asin(sin δ / cos φ)`; a cap that reaches a pole spans
/// every longitude.  Boxes that run past ±180° are split and wrapped.
fn search_boxes(point: GeoPoint, radius_m: f64) -> Vec<AABB<[f64; 2]>> {
    let delta = radius_m / DistanceUnit::EARTH_RADIUS_METERS;
    let half_lat = delta.to_degrees();
    let lat_lo = point.lat - half_lat;
    let lat_hi = point.lat + half_lat;

    if point.lat.abs() + half_lat >= 90.0 {
        return vec![AABB::from_corners([lat_lo, -180.0], [lat_hi, 180.0])];
    }
    let half_lon = (delta.sin() / point.lat.to_radians().cos()).asin().to_degrees();
    let lon_lo = point.lon - half_lon;
    let lon_hi = point.lon + half_lon;

    if lon_lo < -180.0 {
        vec![
            AABB::from_corners([lat_lo, -180.0], [lat_hi, lon_hi]),
            AABB::from_corners([lat_lo, lon_lo + 360.0], [lat_hi, 180.0]),
        ]
    } else if lon_hi > 180.0 {
        vec![
            AABB::from_corners([lat_lo, lon_lo], [lat_hi, 180.0]),
            AABB::from_corners([lat_lo, -180.0], [lat_hi, lon_hi - 360.0]),
        ]
    } else {
        vec![AABB::from_corners([lat_lo, lon_lo], [lat_hi, lon_hi])]
    }
}

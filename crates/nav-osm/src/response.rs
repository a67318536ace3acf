//! Typed model of an Overpass `[out:json]` response.
//!
//! Only the fields the catalog reads are modelled; unknown keys are ignored
//! by serde.  Every tag is optional because OSM tagging is free-form.
//!
//! ```json
//! {
//!   "version": 0.6,
//!   "generator": "Overpass API",
//!   "osm3s": { "timestamp_osm_base": "...", "copyright": "..." },
//!   "elements": [
//!     { "type": "way", "id": 42, "nodes": [1, 2, 3, 4],
//!       "tags": { "building": "university", "building:levels": "3", "name": "Library" } },
//!     { "type": "node", "id": 1, "lat": 53.38, "lon": -6.59 }
//!   ]
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;

use nav_core::{BuildingId, GeoPoint, OsmNodeId};

// ── Envelope ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub version: f64,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub osm3s: Option<Osm3s>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Dataset metadata block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Osm3s {
    #[serde(default)]
    pub timestamp_osm_base: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl OverpassResponse {
    /// All `way` elements, in response order.
    pub fn ways(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(|e| e.kind == ElementKind::Way)
    }

    /// Coordinates of every `node` element keyed by id.
    ///
    /// Nodes without `lat`/`lon` (e.g. from `out ids;` queries) are skipped.
    pub fn node_positions(&self) -> FxHashMap<OsmNodeId, GeoPoint> {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Node)
            .filter_map(|e| e.position().map(|p| (OsmNodeId(e.id), p)))
            .collect()
    }

    /// Ids of all `way` elements.
    pub fn way_ids(&self) -> Vec<BuildingId> {
        self.ways().map(|w| BuildingId(w.id)).collect()
    }
}

// ── Elements ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    /// Node refs of a way, in outline order.  Empty for nodes.
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Element {
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }

    pub fn node_refs(&self) -> impl Iterator<Item = OsmNodeId> + '_ {
        self.nodes.iter().map(|&id| OsmNodeId(id))
    }
}

// ── Tags ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default, rename = "building:levels")]
    pub building_levels: Option<String>,
    #[serde(default, rename = "addr:housename")]
    pub addr_housename: Option<String>,
    #[serde(default, rename = "addr:place")]
    pub addr_place: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub wheelchair: Option<String>,
}

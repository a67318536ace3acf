//! Unit tests for nav-catalog.
//!
//! Fixtures are synthetic Overpass responses laid out in metres around the
//! origin (0°, 0°), so expected distances can be reasoned about by hand.

#[cfg(test)]
mod helpers {
    use nav_core::{BoundaryRing, BuildingId, DistanceUnit, FixedLocation, FootprintEstimate, GeoPoint};
    use nav_osm::{OverpassResponse, parse_response};

    use crate::{Building, BuildingCatalog, CatalogConfig};

    pub const M_PER_DEG: f64 = 111_194.926_644_558_9;

    pub fn at(north_m: f64, east_m: f64) -> GeoPoint {
        GeoPoint::new(north_m / M_PER_DEG, east_m / M_PER_DEG)
    }

    fn node(id: i64, north_m: f64, east_m: f64) -> String {
        let p = at(north_m, east_m);
        format!(r#"{{ "type": "node", "id": {id}, "lat": {}, "lon": {} }}"#, p.lat, p.lon)
    }

    /// Buildings:
    ///
    /// | way  | name          | where               | size      | levels  |
    /// |------|---------------|---------------------|-----------|---------|
    /// | 1001 | Library       | 1000 m north        | 100 × 50  | "3"     |
    /// | 1002 | Gym           | 300 m east          | 40 × 40   | —       |
    /// | 1003 | —             | 2000 m south        | 60 × 20   | "2.5"   |
    /// | 1004 | Broken Levels | 500 m west          | 10 × 10   | "three" |
    /// | 1005 | Ghost         | refs unknown nodes  | —         | —       |
    pub fn ways_json() -> &'static str {
        r#"{
            "version": 0.6,
            "elements": [
                { "type": "way", "id": 1001, "nodes": [1, 2, 3, 4, 1],
                  "tags": { "building": "university", "building:levels": "3", "name": "Library" } },
                { "type": "way", "id": 1002, "nodes": [11, 12, 13, 14],
                  "tags": { "building": "sports_hall", "addr:housename": "Gym" } },
                { "type": "way", "id": 1003, "nodes": [21, 22, 23, 24, 21],
                  "tags": { "building:levels": "2.5" } },
                { "type": "way", "id": 1004, "nodes": [31, 32, 33, 34, 31],
                  "tags": { "building:levels": "three", "name": "Broken Levels" } },
                { "type": "way", "id": 1005, "nodes": [91, 92, 93],
                  "tags": { "name": "Ghost" } }
            ]
        }"#
    }

    pub fn nodes_json() -> String {
        let nodes = [
            // Library: SW, SE, NE, NW
            node(1, 1000.0, 0.0),
            node(2, 1000.0, 100.0),
            node(3, 1050.0, 100.0),
            node(4, 1050.0, 0.0),
            // Gym
            node(11, 0.0, 300.0),
            node(12, 0.0, 340.0),
            node(13, 40.0, 340.0),
            node(14, 40.0, 300.0),
            // Unnamed
            node(21, -2000.0, 0.0),
            node(22, -2000.0, 60.0),
            node(23, -1980.0, 60.0),
            node(24, -1980.0, 0.0),
            // Broken levels
            node(31, 0.0, -500.0),
            node(32, 0.0, -490.0),
            node(33, 10.0, -490.0),
            node(34, 10.0, -500.0),
        ];
        format!(r#"{{ "version": 0.6, "elements": [{}] }}"#, nodes.join(","))
    }

    pub fn responses() -> (OverpassResponse, OverpassResponse) {
        (
            parse_response(ways_json()).unwrap(),
            parse_response(&nodes_json()).unwrap(),
        )
    }

    pub fn catalog_with(config: CatalogConfig) -> BuildingCatalog {
        let (ways, nodes) = responses();
        BuildingCatalog::build(&ways, &nodes, &FixedLocation::new(at(0.0, 0.0)), config).unwrap()
    }

    pub fn catalog() -> BuildingCatalog {
        catalog_with(CatalogConfig::default())
    }

    /// A single-node building at `point`, for spatial query tests.
    pub fn marker(id: i64, point: GeoPoint) -> Building {
        Building {
            id:        BuildingId(id),
            name:      format!("marker {id}"),
            kind:      None,
            ring:      BoundaryRing::from(vec![point]),
            centroid:  point,
            footprint: FootprintEstimate::ZERO,
            height_m:  0.0,
            distance:  0.0,
            unit:      DistanceUnit::Meters,
        }
    }

    pub fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }
}

// ── Building resolution ───────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use nav_core::{BuildingId, GeoPoint};
    use rustc_hash::FxHashMap;

    use super::helpers::{approx, responses};
    use crate::{CatalogConfig, CatalogError, resolve_building};

    #[test]
    fn closed_way_drops_repeated_node() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let way = ways.ways().next().unwrap();
        let b = resolve_building(way, &pos, GeoPoint::new(0.0, 0.0), &CatalogConfig::default()).unwrap();

        assert_eq!(b.id, BuildingId(1001));
        assert_eq!(b.ring.len(), 4);
        assert!(approx(b.footprint.length_m, 100.0, 0.01), "length {}", b.footprint.length_m);
        assert!(approx(b.footprint.width_m, 50.0, 0.01), "width {}", b.footprint.width_m);
        assert!(approx(b.object_scale(), 100.0, 0.01));
    }

    #[test]
    fn height_from_levels() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let cfg = CatalogConfig::default();
        let heights: Vec<f64> = ways
            .ways()
            .take(3)
            .map(|w| resolve_building(w, &pos, GeoPoint::new(0.0, 0.0), &cfg).unwrap().height_m)
            .collect();
        assert_eq!(heights, [9.0, 0.0, 7.5]);
    }

    #[test]
    fn name_fallbacks() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let cfg = CatalogConfig::default();
        let names: Vec<String> = ways
            .ways()
            .take(3)
            .map(|w| resolve_building(w, &pos, GeoPoint::new(0.0, 0.0), &cfg).unwrap().name)
            .collect();
        assert_eq!(names, ["Library", "Gym", "way 1003"]);
    }

    #[test]
    fn invalid_levels_is_an_error() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let way = ways.ways().nth(3).unwrap();
        let err = resolve_building(way, &pos, GeoPoint::new(0.0, 0.0), &CatalogConfig::default()).unwrap_err();
        assert!(
            matches!(&err, CatalogError::InvalidLevels { id, value } if *id == BuildingId(1004) && value == "three"),
            "{err}"
        );
    }

    #[test]
    fn no_geometry_is_an_error() {
        let (ways, _) = responses();
        let way = ways.ways().nth(4).unwrap();
        let err = resolve_building(way, &FxHashMap::default(), GeoPoint::new(0.0, 0.0), &CatalogConfig::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoGeometry(BuildingId(1005))));
    }

    #[test]
    fn distance_is_rounded() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let way = ways.ways().nth(1).unwrap();
        let b = resolve_building(way, &pos, GeoPoint::new(0.0, 0.0), &CatalogConfig::default()).unwrap();
        assert_eq!((b.distance * 100.0).round() / 100.0, b.distance);
        // Centroid is 20 m north, 320 m east.
        assert!(approx(b.distance, (20.0f64.powi(2) + 320.0f64.powi(2)).sqrt(), 0.05), "got {}", b.distance);
    }

    #[test]
    fn raw_edges_when_rounding_disabled() {
        let (ways, nodes) = responses();
        let pos = nodes.node_positions();
        let way = ways.ways().next().unwrap();
        let cfg = CatalogConfig { edge_decimals: None, ..CatalogConfig::default() };
        let b = resolve_building(way, &pos, GeoPoint::new(0.0, 0.0), &cfg).unwrap();
        let raw = nav_core::footprint_estimate(&b.ring);
        assert_eq!(b.footprint, raw);
    }
}

// ── Catalog ranking and queries ───────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use std::io::Write;

    use nav_core::{BuildingId, DistanceUnit, FixedLocation, GeoPoint, LocationFix, SharedLocation};
    use nav_osm::OsmError;

    use super::helpers::{M_PER_DEG, approx, at, catalog, catalog_with, marker, nodes_json, responses, ways_json};
    use crate::{BuildingCatalog, CatalogConfig, CatalogError};

    fn ranked_ids(c: &BuildingCatalog) -> Vec<i64> {
        c.ranked().map(|b| b.id.0).collect()
    }

    #[test]
    fn skips_unresolvable_buildings() {
        let c = catalog();
        assert_eq!(c.len(), 3);
        assert!(c.get(BuildingId(1004)).is_none());
        assert!(c.get(BuildingId(1005)).is_none());
    }

    #[test]
    fn ranked_by_ascending_distance() {
        let c = catalog();
        assert_eq!(ranked_ids(&c), [1002, 1001, 1003]);
        let d: Vec<f64> = c.ranked().map(|b| b.distance).collect();
        assert!(d.windows(2).all(|w| w[0] <= w[1]), "{d:?}");
    }

    #[test]
    fn ties_keep_response_order() {
        let (ways, nodes) = responses();
        let c = BuildingCatalog::build(&ways, &nodes, &nav_core::FixedLocation::new(at(0.0, 0.0)), CatalogConfig::default())
            .unwrap();
        let mut buildings: Vec<_> = c.ranked().cloned().collect();
        for b in &mut buildings {
            b.distance = 1.0;
        }
        let tied = BuildingCatalog::from_buildings(buildings, CatalogConfig::default());
        assert_eq!(ranked_ids(&tied), [1002, 1001, 1003]);
    }

    #[test]
    fn kilometre_distances() {
        let c = catalog_with(CatalogConfig { unit: DistanceUnit::Kilometers, ..CatalogConfig::default() });
        let gym = c.get(BuildingId(1002)).unwrap();
        assert_eq!(gym.unit, DistanceUnit::Kilometers);
        assert!(approx(gym.distance, 0.32, 0.005), "got {}", gym.distance);
    }

    #[test]
    fn rerank_follows_location() {
        let mut c = catalog();
        let gps = SharedLocation::new(LocationFix::new(at(0.0, 0.0), 0.0));
        gps.update(LocationFix::new(at(-1900.0, 0.0), 0.0));
        c.rerank(&gps);
        assert_eq!(ranked_ids(&c), [1003, 1002, 1001]);
        assert!(c.get(BuildingId(1003)).unwrap().distance < 200.0);
    }

    #[test]
    fn nearest_building() {
        let c = catalog();
        assert_eq!(c.nearest(at(1100.0, 0.0)).unwrap().id, BuildingId(1001));
        assert_eq!(c.nearest(at(0.0, 250.0)).unwrap().id, BuildingId(1002));

        let empty = BuildingCatalog::from_buildings(Vec::new(), CatalogConfig::default());
        assert!(empty.nearest(at(0.0, 0.0)).is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn nearest_at_high_latitude() {
        // At 70°N a degree of longitude is about a third of a degree of
        // latitude, so the nine buildings 100 m north are all closer in
        // degree space than the one 76 m east.
        let here = GeoPoint::new(70.0, 10.0);
        let m_per_deg_lon = M_PER_DEG * 70f64.to_radians().cos();
        let mut buildings: Vec<_> = (0..9)
            .map(|i| {
                let east = (i as f64 - 4.0) * 2.0;
                marker(i, GeoPoint::new(here.lat + 100.0 / M_PER_DEG, here.lon + east / m_per_deg_lon))
            })
            .collect();
        buildings.push(marker(99, GeoPoint::new(here.lat, here.lon + 76.0 / m_per_deg_lon)));
        let c = BuildingCatalog::from_buildings(buildings, CatalogConfig::default());

        let hit = c.nearest(here).unwrap();
        assert_eq!(hit.id, BuildingId(99));
        assert!(approx(here.distance_m(hit.centroid), 76.0, 0.5));
    }

    #[test]
    fn queries_wrap_the_antimeridian() {
        let here = GeoPoint::new(0.0, 179.9995);
        let across = marker(1, GeoPoint::new(0.0, -179.9995));
        let same_side = marker(2, GeoPoint::new(0.003, 179.9995));
        let c = BuildingCatalog::from_buildings(vec![across, same_side], CatalogConfig::default());

        let ids: Vec<i64> = c.within(here, 500.0).iter().map(|b| b.id.0).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(c.nearest(here).unwrap().id, BuildingId(1));

        let west = GeoPoint::new(0.0, -179.9995);
        let ids: Vec<i64> = c.within(west, 200.0).iter().map(|b| b.id.0).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn within_across_the_pole() {
        let here = GeoPoint::new(89.9995, 0.0);
        let other_side = marker(7, GeoPoint::new(89.9995, 180.0));
        let c = BuildingCatalog::from_buildings(vec![other_side], CatalogConfig::default());
        // 0.001° of latitude through the pole is about 111 m.
        assert_eq!(c.within(here, 500.0).len(), 1);
        assert!(c.within(here, 50.0).is_empty());
    }

    #[test]
    fn within_radius() {
        let c = catalog();
        let near: Vec<i64> = c.within(at(0.0, 0.0), 500.0).iter().map(|b| b.id.0).collect();
        assert_eq!(near, [1002]);

        let all: Vec<i64> = c.within(at(0.0, 0.0), 5_000.0).iter().map(|b| b.id.0).collect();
        assert_eq!(all, [1002, 1001, 1003]);

        assert!(c.within(at(0.0, 0.0), -1.0).is_empty());
        assert!(c.within(at(0.0, 0.0), f64::NAN).is_empty());
    }

    #[test]
    fn select_builds_nav_target() {
        let c = catalog();
        let t = c.select(BuildingId(1001)).unwrap();
        assert_eq!(t.name, "Library");
        assert_eq!(t.altitude_m, 9.0);
        assert!(approx(t.scale, 100.0, 0.01));
        assert_eq!(t.point, c.get(BuildingId(1001)).unwrap().centroid);

        assert!(c.select(BuildingId(42)).is_none());
        assert!(matches!(c.require(BuildingId(42)), Err(CatalogError::UnknownBuilding(BuildingId(42)))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let (ways, nodes) = responses();
        let cfg = CatalogConfig { meters_per_level: -3.0, ..CatalogConfig::default() };
        let res = BuildingCatalog::build(&ways, &nodes, &nav_core::FixedLocation::new(at(0.0, 0.0)), cfg);
        assert!(matches!(res, Err(CatalogError::Config(_))));
    }

    #[test]
    fn from_saved_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ways_path = dir.path().join("ways.json");
        let nodes_path = dir.path().join("nodes.json");
        std::fs::File::create(&ways_path).unwrap().write_all(ways_json().as_bytes()).unwrap();
        std::fs::File::create(&nodes_path).unwrap().write_all(nodes_json().as_bytes()).unwrap();

        let here = FixedLocation::new(at(0.0, 0.0));
        let c = BuildingCatalog::from_files(&ways_path, &nodes_path, &here, CatalogConfig::default()).unwrap();
        assert_eq!(ranked_ids(&c), [1002, 1001, 1003]);

        let missing = dir.path().join("missing.json");
        let res = BuildingCatalog::from_files(&missing, &nodes_path, &here, CatalogConfig::default());
        assert!(matches!(res, Err(CatalogError::Osm(OsmError::Io(_)))));

        std::fs::write(&nodes_path, "{ \"elements\": [").unwrap();
        let res = BuildingCatalog::from_files(&ways_path, &nodes_path, &here, CatalogConfig::default());
        assert!(matches!(res, Err(CatalogError::Osm(OsmError::Json(_)))));
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::io::{Cursor, Write};

    use nav_core::DistanceUnit;

    use crate::{CatalogConfig, CatalogError};

    #[test]
    fn defaults() {
        let c = CatalogConfig::default();
        assert_eq!(c.unit, DistanceUnit::Meters);
        assert_eq!(c.distance_decimals, 2);
        assert_eq!(c.meters_per_level, 3.0);
        assert_eq!(c.edge_decimals, Some(2));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_override() {
        let c = CatalogConfig::from_json_reader(Cursor::new(r#"{ "unit": "kilometers", "distance_decimals": 3 }"#))
            .unwrap();
        assert_eq!(c.unit, DistanceUnit::Kilometers);
        assert_eq!(c.distance_decimals, 3);
        assert_eq!(c.meters_per_level, 3.0);
    }

    #[test]
    fn null_disables_edge_rounding() {
        let c = CatalogConfig::from_json_reader(Cursor::new(r#"{ "edge_decimals": null }"#)).unwrap();
        assert_eq!(c.edge_decimals, None);
    }

    #[test]
    fn invalid_values_rejected() {
        let err = CatalogConfig::from_json_reader(Cursor::new(r#"{ "meters_per_level": -1.0 }"#)).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));

        let err = CatalogConfig::from_json_reader(Cursor::new(r#"{ "unit": "leagues" }"#)).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn edge_decimals_bounded() {
        let c = CatalogConfig { edge_decimals: Some(9), ..CatalogConfig::default() };
        assert!(c.validate().is_ok());

        let c = CatalogConfig { edge_decimals: Some(400), ..CatalogConfig::default() };
        assert!(matches!(c.validate(), Err(CatalogError::Config(_))));

        let err = CatalogConfig::from_json_reader(Cursor::new(r#"{ "edge_decimals": 10 }"#)).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn from_file() {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        write!(f, r#"{{ "meters_per_level": 4.0 }}"#).unwrap();
        let c = CatalogConfig::from_json_path(f.path()).unwrap();
        assert_eq!(c.meters_per_level, 4.0);
    }
}

//! `nav-core` — foundational geospatial types for the `arnav` workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and a single external one (`thiserror`, plus
//! optional `serde`).  Everything here is pure computation: no I/O, no
//! global state.
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `DistanceUnit`, haversine `distance`, `centroid` |
//! | [`footprint`]   | `BoundaryRing`, `FootprintEstimate`, `footprint_estimate`  |
//! | [`location`]    | `LocationProvider` trait, `FixedLocation`, `SharedLocation` |
//! | [`ids`]         | `BuildingId`, `OsmNodeId`                                  |
//! | [`error`]       | `NavError`                                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod footprint;
pub mod geo;
pub mod ids;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::NavError;
pub use footprint::{BoundaryRing, FootprintEstimate, footprint_estimate, footprint_estimate_rounded};
pub use geo::{DistanceUnit, GeoPoint, centroid, distance, round_to, to_radians};
pub use ids::{BuildingId, OsmNodeId};
pub use location::{FixedLocation, LocationFix, LocationProvider, SharedLocation};

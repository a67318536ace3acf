//! Selection hand-off.
//!
//! When the user picks a building, the AR scene needs where to put the
//! marker, how high, and how big.  `NavTarget` carries exactly that, passed
//! by value to whoever places the marker.

use nav_core::{BuildingId, GeoPoint};

use crate::Building;

#[derive(Clone, Debug, PartialEq)]
pub struct NavTarget {
    pub building_id: BuildingId,
    pub name: String,
    pub point: GeoPoint,
    /// Ground-relative altitude of the marker, in metres.
    pub altitude_m: f64,
    /// Uniform scale for the placed object, in metres.
    pub scale: f64,
}

impl From<&Building> for NavTarget {
    fn from(b: &Building) -> Self {
        Self {
            building_id: b.id,
            name:        b.name.clone(),
            point:       b.centroid,
            altitude_m:  b.height_m,
            scale:       b.object_scale(),
        }
    }
}

//! Human-readable distance text for list entries.

use nav_core::DistanceUnit;

/// `"Distance : 12.34m"`.  The value is printed as stored, so round it first.
pub fn distance_label(distance: f64, unit: DistanceUnit) -> String {
    format!("Distance : {distance}{unit}")
}

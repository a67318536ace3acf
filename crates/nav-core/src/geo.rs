//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Building footprints are a few
//! tens of metres across, so edge lengths need the full double precision
//! that single-precision coordinates (~1 m at the equator) cannot give.

use std::fmt;
use std::str::FromStr;

use crate::NavError;

/// Convert degrees to radians: `degrees * π / 180`.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Round `value` to `decimals` decimal places, half away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

// ── DistanceUnit ──────────────────────────────────────────────────────────────

/// Unit in which [`distance`] reports its result.
///
/// Each unit carries its own Earth-radius constant.  Miles and kilometres use
/// a 6367 km reference radius while metres use 6371 km, so
/// `km * 1000` and `m` disagree by roughly 0.06 %.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    Meters,
}

impl DistanceUnit {
    pub const EARTH_RADIUS_MILES: f64 = 3956.0;
    pub const EARTH_RADIUS_KILOMETERS: f64 = 6367.0;
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Earth radius expressed in this unit.
    #[inline]
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles      => Self::EARTH_RADIUS_MILES,
            DistanceUnit::Kilometers => Self::EARTH_RADIUS_KILOMETERS,
            DistanceUnit::Meters     => Self::EARTH_RADIUS_METERS,
        }
    }

    /// Short suffix used in labels and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Miles      => "mi",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters     => "m",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mile" | "miles"                         => Ok(DistanceUnit::Miles),
            "km" | "kilometer" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "m" | "meter" | "meters" | "metre" | "metres"    => Ok(DistanceUnit::Meters),
            _ => Err(NavError::UnknownUnit(s.to_owned())),
        }
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in `unit`.  See [`distance`].
    #[inline]
    pub fn distance(self, other: GeoPoint, unit: DistanceUnit) -> f64 {
        distance(self, other, unit)
    }

    /// Great-circle distance to `other` in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        distance(self, other, DistanceUnit::Meters)
    }

    /// Approximate bounding-box check, much cheaper than `distance_m` for
    /// quick rejection.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Haversine great-circle distance between `a` and `b` in `unit`.
///
/// Symmetric, zero for identical points, and finite for all finite input.
/// The haversine root is clamped to 1 so rounding just past 1.0 near the
/// antipode cannot push `asin` out of its domain.  NaN input propagates.
pub fn distance(a: GeoPoint, b: GeoPoint, unit: DistanceUnit) -> f64 {
    let lat_a = to_radians(a.lat);
    let lat_b = to_radians(b.lat);

    let d_lat = lat_b - lat_a;
    let d_lon = to_radians(b.lon) - to_radians(a.lon);

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    // `f64::min` would swallow NaN.
    let root = h.sqrt();
    let root = if root > 1.0 { 1.0 } else { root };

    unit.earth_radius() * 2.0 * root.asin()
}

/// Arithmetic mean of latitudes and longitudes.
///
/// Returns `None` for an empty slice.  Not antimeridian-aware, which is fine
/// for building-sized point sets.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), p| (la + p.lat, lo + p.lon));
    Some(GeoPoint::new(lat_sum / n, lon_sum / n))
}

//! Footprint size estimation from a closed boundary ring.
//!
//! The estimate walks the ring edge by edge (including the closing edge from
//! the last point back to the first) and splits edges by index parity:
//! even edges feed a running maximum `length_m`, odd edges a running maximum
//! `width_m`.  For a ring that traces a rectangle corner to corner this gives
//! its two side lengths.  For any other shape it is only a rough proxy, and
//! the result depends on where the ring starts.

use crate::geo::{GeoPoint, centroid, round_to};

// ── BoundaryRing ──────────────────────────────────────────────────────────────

/// An ordered polygon outline.  The first and last points are implicitly
/// connected; do not repeat the first point at the end.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryRing {
    points: Vec<GeoPoint>,
}

impl BoundaryRing {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: GeoPoint) {
        self.points.push(p);
    }

    /// Edges in traversal order as `(from, to)` pairs, closing the ring.
    ///
    /// Yields `len()` edges when the ring has at least two points and none
    /// otherwise.
    pub fn edges(&self) -> impl Iterator<Item = (GeoPoint, GeoPoint)> + '_ {
        let n = if self.points.len() < 2 { 0 } else { self.points.len() };
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Length of every edge in metres, in traversal order.
    pub fn edge_lengths_m(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges().map(|(a, b)| a.distance_m(b))
    }

    /// Mean of the ring's vertices, `None` when empty.
    pub fn centroid(&self) -> Option<GeoPoint> {
        centroid(&self.points)
    }
}

impl From<Vec<GeoPoint>> for BoundaryRing {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<GeoPoint> for BoundaryRing {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── FootprintEstimate ─────────────────────────────────────────────────────────

/// Longest even-indexed and longest odd-indexed edge of a ring, in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootprintEstimate {
    pub length_m: f64,
    pub width_m: f64,
}

impl FootprintEstimate {
    pub const ZERO: FootprintEstimate = FootprintEstimate { length_m: 0.0, width_m: 0.0 };

    /// Single scalar used to scale a placed object: `max(length, width)`.
    #[inline]
    pub fn object_scale(&self) -> f64 {
        self.length_m.max(self.width_m)
    }
}

/// Parity-bucketed footprint estimate over raw edge lengths.
///
/// Rings with fewer than two points yield [`FootprintEstimate::ZERO`].
pub fn footprint_estimate(ring: &BoundaryRing) -> FootprintEstimate {
    bucket_edges(ring.edge_lengths_m())
}

/// Like [`footprint_estimate`] but rounds each edge length to `decimals`
/// places before bucketing.
pub fn footprint_estimate_rounded(ring: &BoundaryRing, decimals: u32) -> FootprintEstimate {
    bucket_edges(ring.edge_lengths_m().map(|d| round_to(d, decimals)))
}

fn bucket_edges(lengths: impl Iterator<Item = f64>) -> FootprintEstimate {
    let mut est = FootprintEstimate::ZERO;
    for (i, d) in lengths.enumerate() {
        if i % 2 == 0 {
            if d > est.length_m {
                est.length_m = d;
            }
        } else if d > est.width_m {
            est.width_m = d;
        }
    }
    est
}

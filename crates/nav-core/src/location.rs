//! Device-location providers.
//!
//! Consumers that need "where is the user right now" take a
//! `&dyn LocationProvider` instead of reading process-wide coordinates.  A
//! sensor task owns a [`SharedLocation`] handle and pushes fixes into it; any
//! number of readers clone the handle and see the latest fix.

use std::sync::{Arc, RwLock};

use crate::GeoPoint;

/// A single position reading with altitude.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub point: GeoPoint,
    pub altitude_m: f64,
}

impl LocationFix {
    pub fn new(point: GeoPoint, altitude_m: f64) -> Self {
        Self { point, altitude_m }
    }
}

/// Source of the device's current position.
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> GeoPoint;

    /// Full fix including altitude, if the provider has one.
    fn current_fix(&self) -> Option<LocationFix> {
        None
    }
}

// ── FixedLocation ─────────────────────────────────────────────────────────────

/// A provider that always reports the same fix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedLocation(pub LocationFix);

impl FixedLocation {
    pub fn new(point: GeoPoint) -> Self {
        Self(LocationFix::new(point, 0.0))
    }

    pub fn with_altitude(point: GeoPoint, altitude_m: f64) -> Self {
        Self(LocationFix::new(point, altitude_m))
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> GeoPoint {
        self.0.point
    }

    fn current_fix(&self) -> Option<LocationFix> {
        Some(self.0)
    }
}

// ── SharedLocation ────────────────────────────────────────────────────────────

/// Cloneable handle to a fix that an external sensor updates.
///
/// Clones share the same cell.  A writer that panicked mid-update cannot
/// leave a torn `LocationFix` (it is `Copy` and assigned whole), so readers
/// recover the value from a poisoned lock instead of propagating the panic.
#[derive(Clone, Debug)]
pub struct SharedLocation {
    pub(crate) fix: Arc<RwLock<LocationFix>>,
}

impl SharedLocation {
    pub fn new(initial: LocationFix) -> Self {
        Self { fix: Arc::new(RwLock::new(initial)) }
    }

    /// Replace the current fix.
    pub fn update(&self, fix: LocationFix) {
        let mut guard = self.fix.write().unwrap_or_else(|e| e.into_inner());
        *guard = fix;
    }

    fn read(&self) -> LocationFix {
        *self.fix.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl LocationProvider for SharedLocation {
    fn current_location(&self) -> GeoPoint {
        self.read().point
    }

    fn current_fix(&self) -> Option<LocationFix> {
        Some(self.read())
    }
}

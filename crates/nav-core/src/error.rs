//! Workspace base error type.
//!
//! Distance and footprint computations never fail; the only fallible step in
//! this crate is parsing a [`DistanceUnit`](crate::DistanceUnit) from text.
//! Sub-crates define their own enums.

use thiserror::Error;

/// The top-level error type for `nav-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("unknown distance unit {0:?} (expected mi, km or m)")]
    UnknownUnit(String),
}

//! OSM-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-osm`.
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("Overpass JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OsmResult<T> = Result<T, OsmError>;

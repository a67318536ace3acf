//! Catalog error type.

use thiserror::Error;

use nav_core::BuildingId;
use nav_osm::OsmError;

/// Errors produced by `nav-catalog`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0} has no outline nodes with known coordinates")]
    NoGeometry(BuildingId),

    #[error("{0} is not in the catalog")]
    UnknownBuilding(BuildingId),

    #[error("{id} has unparseable building:levels {value:?}")]
    InvalidLevels { id: BuildingId, value: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Osm(#[from] OsmError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

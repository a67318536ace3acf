//! Catalog configuration.
//!
//! All fields have defaults matching the on-device listing: metres, two
//! decimals, three metres per storey.  A JSON file may override any subset:
//!
//! ```json
//! { "unit": "kilometers", "distance_decimals": 3 }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use nav_core::DistanceUnit;

use crate::{CatalogError, CatalogResult};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Unit of `Building::distance`.
    pub unit: DistanceUnit,

    /// Decimal places kept on `Building::distance`.
    pub distance_decimals: u32,

    /// Storey height used to turn `building:levels` into metres.
    pub meters_per_level: f64,

    /// Round each outline edge to this many decimals before the footprint
    /// bucketing.  `None` compares raw edge lengths.
    pub edge_decimals: Option<u32>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            unit:              DistanceUnit::Meters,
            distance_decimals: 2,
            meters_per_level:  3.0,
            edge_decimals:     Some(2),
        }
    }
}

impl CatalogConfig {
    /// Reject values that would make every derived number meaningless.
    pub fn validate(&self) -> CatalogResult<()> {
        if !self.meters_per_level.is_finite() || self.meters_per_level < 0.0 {
            return Err(CatalogError::Config(format!(
                "meters_per_level must be a finite non-negative number, got {}",
                self.meters_per_level
            )));
        }
        if self.distance_decimals > 9 {
            return Err(CatalogError::Config(format!(
                "distance_decimals must be at most 9, got {}",
                self.distance_decimals
            )));
        }
        if let Some(decimals) = self.edge_decimals.filter(|&d| d > 9) {
            return Err(CatalogError::Config(format!(
                "edge_decimals must be at most 9, got {decimals}"
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn from_json_path(path: &Path) -> CatalogResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Like [`from_json_path`](Self::from_json_path) but accepts any `Read`.
    pub fn from_json_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let config: CatalogConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

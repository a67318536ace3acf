//! CSV listing backend.
//!
//! Creates `buildings.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ListingWriter;
use crate::{ListingRow, OutputError, OutputResult};

pub const LISTING_FILE: &str = "buildings.csv";

/// Writes the building listing to a single CSV file.
pub struct CsvListingWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvListingWriter {
    /// Open (or create) `buildings.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(LISTING_FILE))?;
        rows.write_record([
            "rank", "building_id", "name", "distance", "unit",
            "lat", "lon", "object_scale_m", "height_m",
        ])?;
        Ok(Self { rows, finished: false })
    }
}

impl ListingWriter for CsvListingWriter {
    fn write_rows(&mut self, rows: &[ListingRow]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in rows {
            self.rows.write_record(&[
                row.rank.to_string(),
                row.building_id.to_string(),
                row.name.clone(),
                row.distance.to_string(),
                row.unit.to_string(),
                format!("{:.7}", row.lat),
                format!("{:.7}", row.lon),
                format!("{:.2}", row.object_scale_m),
                row.height_m.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

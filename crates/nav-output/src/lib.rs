//! `nav-output` — building listing output for the arnav workspace.
//!
//! A listing is the ranked catalog flattened into [`ListingRow`]s.  Rows go
//! to any [`ListingWriter`]; the bundled backend writes CSV.
//!
//! | Backend | Files created   |
//! |---------|-----------------|
//! | CSV     | `buildings.csv` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvListingWriter, ListingWriter, listing_rows};
//!
//! let mut writer = CsvListingWriter::new(Path::new("./output"))?;
//! writer.write_rows(&listing_rows(&catalog))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod label;
pub mod row;
pub mod writer;


pub use self::csv::CsvListingWriter;
pub use error::{OutputError, OutputResult};
pub use label::distance_label;
pub use row::{ListingRow, listing_rows};
pub use writer::ListingWriter;

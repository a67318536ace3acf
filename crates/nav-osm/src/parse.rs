//! Overpass JSON parsing entry points.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{OsmResult, OverpassResponse};

/// Parse a response body already held in memory.
pub fn parse_response(body: &str) -> OsmResult<OverpassResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Like [`parse_response`] but accepts any `Read` source.
pub fn parse_reader<R: Read>(reader: R) -> OsmResult<OverpassResponse> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a response previously saved to disk.
pub fn parse_file(path: &Path) -> OsmResult<OverpassResponse> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

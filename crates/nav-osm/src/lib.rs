//! `nav-osm` — OpenStreetMap data as served by the Overpass API.
//!
//! The crate does not perform HTTP requests.  It builds the query strings a
//! fetcher sends, and turns the `[out:json]` responses that come back into
//! typed values.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`response`] | `OverpassResponse`, `Element`, `Tags`, `Osm3s`            |
//! | [`query`]    | `way_query`, `node_query`, `interpreter_url`              |
//! | [`parse`]    | `parse_response`, `parse_reader`, `parse_file`            |
//! | [`error`]    | `OsmError`, `OsmResult<T>`                                |

pub mod error;
pub mod parse;
pub mod query;
pub mod response;


pub use error::{OsmError, OsmResult};
pub use parse::{parse_file, parse_reader, parse_response};
pub use query::{DEFAULT_ENDPOINT, interpreter_url, node_query, way_query};
pub use response::{Element, ElementKind, Osm3s, OverpassResponse, Tags};

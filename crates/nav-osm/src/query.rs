//! Overpass QL query builders.
//!
//! A building listing takes two round trips: one `way(..)` union for the
//! building outlines, then one `node(..)` union per building for the outline
//! coordinates.  Both use the same `[out:json];( ... );out;` shape.

use nav_core::{BuildingId, OsmNodeId};

/// Public Overpass interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Union query selecting the given ways.  `None` when `ids` is empty, since
/// an empty union is not worth a request.
pub fn way_query<I>(ids: I) -> Option<String>
where
    I: IntoIterator<Item = BuildingId>,
{
    union_query("way", ids.into_iter().map(|id| id.0))
}

/// Union query selecting the given nodes.  `None` when `ids` is empty.
pub fn node_query<I>(ids: I) -> Option<String>
where
    I: IntoIterator<Item = OsmNodeId>,
{
    union_query("node", ids.into_iter().map(|id| id.0))
}

/// Full GET URL for `query` against `endpoint`.
///
/// The query is passed through as-is; Overpass accepts the unescaped form.
pub fn interpreter_url(endpoint: &str, query: &str) -> String {
    format!("{endpoint}?data={query}")
}

fn union_query(kind: &str, ids: impl Iterator<Item = i64>) -> Option<String> {
    let mut body = String::new();
    for id in ids {
        body.push_str(kind);
        body.push('(');
        body.push_str(&id.to_string());
        body.push_str(");");
    }
    if body.is_empty() {
        return None;
    }
    Some(format!("[out:json];({body});out;"))
}

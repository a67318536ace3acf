//! Strongly typed OpenStreetMap identifier wrappers.
//!
//! OSM ids are signed 64-bit integers shared across element kinds, so a way
//! and a node can carry the same number.  Wrapping them keeps a building's
//! way id from being looked up in a node table by accident.

use std::fmt;

/// Generate a typed ID wrapper around an OSM integer id.
macro_rules! osm_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

osm_id! {
    /// OSM way id of a building outline.
    pub struct BuildingId(i64);
}

osm_id! {
    /// OSM node id of a single outline vertex.
    pub struct OsmNodeId(i64);
}

//! `nav-catalog` — buildings ranked by distance from the user.
//!
//! Takes the two Overpass responses a listing needs (building ways, outline
//! nodes) plus a [`LocationProvider`](nav_core::LocationProvider), and
//! produces [`Building`]s with a centroid, footprint, height and distance.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`config`]   | `CatalogConfig`                                             |
//! | [`building`] | `Building`, `resolve_building`                              |
//! | [`catalog`]  | `BuildingCatalog` (ranking, R-tree nearest/within queries)  |
//! | [`target`]   | `NavTarget`, the hand-off to whatever places the AR marker  |
//! | [`error`]    | `CatalogError`, `CatalogResult<T>`                          |

pub mod building;
pub mod catalog;
pub mod config;
pub mod error;
pub mod target;

#[cfg(test)]
mod tests;

pub use building::{Building, resolve_building};
pub use catalog::BuildingCatalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use target::NavTarget;

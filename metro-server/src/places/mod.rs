//! Points of interest near stations.
//!
//! A catalog of places keyed by station, with the attribute filters used
//! by the recommendation endpoints and the conversion of places into trip
//! candidates.

mod catalog;
mod error;
mod place;

pub use catalog::PlaceCatalog;
pub use error::CatalogError;
pub use place::Place;

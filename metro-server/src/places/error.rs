//! Catalog construction errors.

use crate::domain::InvalidStationCode;

/// Errors that can occur while building a [`super::PlaceCatalog`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// A catalog key is not a usable station code
    #[error("catalog key {key:?}: {source}")]
    InvalidStation {
        key: String,
        #[source]
        source: InvalidStationCode,
    },

    /// A walking time is negative or not a finite number
    #[error("place {index} at {station}: walk_minutes must be a non-negative number, got {value}")]
    InvalidWalkMinutes {
        station: String,
        index: usize,
        value: f64,
    },
}

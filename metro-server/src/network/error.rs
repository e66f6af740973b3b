//! Network construction errors.

use crate::domain::InvalidStationCode;

/// Errors that can occur while building a [`super::Network`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is not a usable station code
    #[error("edge {index}: {source}")]
    InvalidStation {
        index: usize,
        #[source]
        source: InvalidStationCode,
    },

    /// An edge time is negative or not a finite number
    #[error("edge {index} ({from}-{to}): time must be a non-negative number, got {time}")]
    InvalidEdgeTime {
        index: usize,
        from: String,
        to: String,
        time: f64,
    },
}

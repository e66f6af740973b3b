//! Routing error types.

use crate::domain::StationCode;

/// Errors returned by routing queries.
///
/// All of these are caused by the query itself; retrying with the same
/// input gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A station code is not part of the network
    #[error("unknown station: {0}")]
    UnknownStation(StationCode),

    /// Both stations exist but are not connected
    #[error("no path between {origin} and {destination}")]
    NoPath {
        origin: StationCode,
        destination: StationCode,
    },

    /// The origin of a trip search is not part of the network
    #[error("unknown origin station: {0}")]
    UnknownOrigin(StationCode),

    /// No candidate destination can be reached from the origin
    #[error("no reachable candidates from {origin}")]
    NoReachableCandidates { origin: StationCode },
}

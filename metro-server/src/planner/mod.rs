//! Routing over the transit network.
//!
//! This module answers the three routing questions of the service:
//! the fastest route between two stations, the same route broken down into
//! per-line segments, and the best trip to any of a set of candidate
//! destinations when each carries a fixed extra cost (such as a walk).
//!
//! Everything here is a pure function of its inputs and an immutable
//! [`Network`](crate::network::Network).

mod error;
mod itinerary;
mod path;
mod trip;

pub use error::RouteError;
pub use itinerary::{Itinerary, Segment, segment_path};
pub use path::{PathFinder, Route, ShortestPathTree};
pub use trip::{Candidate, TripOptimizer, TripResult};

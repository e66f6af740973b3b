//! The static transit network.
//!
//! Stations connected by undirected, timed, line-tagged edges. The network
//! is built once from an edge list and never mutated afterwards, so it can
//! be shared freely between request handlers.

mod edge;
mod error;
mod graph;

pub use edge::{EdgeAttributes, EdgeRecord, UNKNOWN_LINE};
pub use error::GraphError;
pub use graph::{Network, StationId};

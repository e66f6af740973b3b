//! Domain types for the metro planner.
//!
//! Station identity is validated once at the boundary, so code that
//! receives a `StationCode` can compare codes by plain equality.

mod station;

pub use station::{InvalidStationCode, StationCode};

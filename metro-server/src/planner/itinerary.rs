//! Itinerary breakdown of a route.
//!
//! A route is a bare list of stations. The itinerary groups its edges into
//! segments, one per maximal run on the same line, and counts the line
//! changes between them.

use serde::Serialize;

use crate::domain::StationCode;
use crate::network::{Network, UNKNOWN_LINE};

use super::path::Route;

/// A run of consecutive edges on one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Boarding station
    pub from: StationCode,
    /// Alighting station
    pub to: StationCode,
    /// Line travelled
    pub line: String,
    /// Travel time on this segment, in minutes
    pub time: f64,
    /// Number of edges travelled on this segment
    pub stops: usize,
}

/// A route broken down into per-line segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Stations visited, origin first.
    pub path: Vec<StationCode>,

    /// Total travel time, in minutes.
    pub total_time: f64,

    /// Number of edges travelled.
    pub total_stops: usize,

    /// Number of line changes.
    pub transfers: usize,

    /// Per-line segments, in travel order.
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// Break a route down into segments.
    pub fn from_route(network: &Network, route: Route) -> Self {
        let segments = segment_path(network, &route.path);

        Self {
            total_stops: route.hop_count(),
            transfers: segments.len().saturating_sub(1),
            segments,
            total_time: route.total_time,
            path: route.path,
        }
    }
}

/// The segment currently being extended.
struct OpenSegment<'a> {
    from: &'a StationCode,
    line: &'a str,
    time: f64,
    stops: usize,
}

impl OpenSegment<'_> {
    fn close(self, to: &StationCode) -> Segment {
        Segment {
            from: self.from.clone(),
            to: to.clone(),
            line: self.line.to_string(),
            time: self.time,
            stops: self.stops,
        }
    }
}

/// Split a path into maximal same-line segments.
///
/// Paths of fewer than two stations have no segments. A station pair with
/// no edge in the network counts as zero time on the unknown line; valid
/// routes never contain one.
pub fn segment_path(network: &Network, path: &[StationCode]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut open: Option<OpenSegment<'_>> = None;

    for pair in path.windows(2) {
        let (u, v) = (&pair[0], &pair[1]);
        let (line, time) = match network.edge_attributes(u, v) {
            Some(edge) => (edge.line.as_str(), edge.time),
            None => (UNKNOWN_LINE, 0.0),
        };

        let current = match open.take() {
            Some(segment) if segment.line == line => segment,
            Some(segment) => {
                // Line change at u
                segments.push(segment.close(u));
                OpenSegment {
                    from: u,
                    line,
                    time: 0.0,
                    stops: 0,
                }
            }
            None => OpenSegment {
                from: u,
                line,
                time: 0.0,
                stops: 0,
            },
        };

        open = Some(OpenSegment {
            time: current.time + time,
            stops: current.stops + 1,
            ..current
        });
    }

    if let (Some(segment), Some(last)) = (open, path.last()) {
        segments.push(segment.close(last));
    }

    segments
}

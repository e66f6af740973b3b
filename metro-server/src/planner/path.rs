//! Shortest-path search.
//!
//! Dijkstra's algorithm over the network with edge time as the weight.
//! Equal-cost alternatives are resolved deterministically: the heap is
//! ordered by `(cost, station id)` and a tentative cost is only replaced by
//! a strictly smaller one, so the first-discovered predecessor is kept.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::domain::StationCode;
use crate::network::{Network, StationId};

use super::error::RouteError;

/// A shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Stations visited, origin first, destination last.
    pub path: Vec<StationCode>,

    /// Sum of the edge times along `path`, in minutes.
    pub total_time: f64,
}

impl Route {
    /// The first station of the route.
    pub fn origin(&self) -> &StationCode {
        &self.path[0]
    }

    /// The last station of the route.
    pub fn destination(&self) -> &StationCode {
        &self.path[self.path.len() - 1]
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a single-source search from one origin.
///
/// Holds the settled cost and predecessor of every station reached, so
/// routes to many destinations can be read off one traversal.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'a> {
    network: &'a Network,
    origin: StationId,
    cost: Vec<f64>,
    previous: Vec<Option<StationId>>,
    settled: Vec<bool>,
}

impl<'a> ShortestPathTree<'a> {
    /// Run Dijkstra from `origin`.
    ///
    /// With a `target`, the search stops as soon as the target is settled;
    /// only the target's route is then guaranteed to be final.
    fn search(network: &'a Network, origin: StationId, target: Option<StationId>) -> Self {
        let n = network.station_count();
        let mut cost = vec![f64::INFINITY; n];
        let mut previous = vec![None; n];
        let mut settled = vec![false; n];

        cost[origin.0] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((OrderedFloat(0.0), origin)));

        while let Some(Reverse((OrderedFloat(current), station))) = heap.pop() {
            if settled[station.0] {
                continue; // Stale entry
            }
            settled[station.0] = true;

            if target == Some(station) {
                break;
            }

            for (next, edge) in network.neighbors(station) {
                if settled[next.0] {
                    continue;
                }

                let candidate = current + edge.time;
                if candidate < cost[next.0] {
                    cost[next.0] = candidate;
                    previous[next.0] = Some(station);
                    heap.push(Reverse((OrderedFloat(candidate), next)));
                }
            }
        }

        Self {
            network,
            origin,
            cost,
            previous,
            settled,
        }
    }

    /// The station the search started from.
    pub fn origin(&self) -> &StationCode {
        self.network.station(self.origin)
    }

    /// Check whether a station was reached.
    pub fn reaches(&self, station: StationId) -> bool {
        self.settled.get(station.0).copied().unwrap_or(false)
    }

    /// Read the route to `destination`, or `None` if it was not reached.
    pub fn route_to(&self, destination: StationId) -> Option<Route> {
        if !self.reaches(destination) {
            return None;
        }

        let mut ids = vec![destination];
        let mut current = destination;
        while let Some(prev) = self.previous[current.0] {
            ids.push(prev);
            current = prev;
        }
        ids.reverse();

        Some(Route {
            path: ids
                .into_iter()
                .map(|id| self.network.station(id).clone())
                .collect(),
            total_time: self.cost[destination.0],
        })
    }
}

/// Shortest-path queries over a network.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    network: &'a Network,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over `network`.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// The network searched by this finder.
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Find the fastest route between two stations.
    ///
    /// Returns a one-station route with zero time when `origin` equals
    /// `destination`.
    pub fn shortest_path(
        &self,
        origin: &StationCode,
        destination: &StationCode,
    ) -> Result<Route, RouteError> {
        let from = self.lookup(origin)?;
        let to = self.lookup(destination)?;

        ShortestPathTree::search(self.network, from, Some(to))
            .route_to(to)
            .ok_or_else(|| RouteError::NoPath {
                origin: origin.clone(),
                destination: destination.clone(),
            })
    }

    /// Search every station reachable from `origin`.
    pub fn tree_from(&self, origin: &StationCode) -> Result<ShortestPathTree<'a>, RouteError> {
        let from = self.lookup(origin)?;
        Ok(ShortestPathTree::search(self.network, from, None))
    }

    fn lookup(&self, code: &StationCode) -> Result<StationId, RouteError> {
        self.network
            .station_id(code)
            .ok_or_else(|| RouteError::UnknownStation(code.clone()))
    }
}

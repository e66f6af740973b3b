//! Best-trip search over candidate destinations.
//!
//! Each candidate is a station plus a fixed extra cost (typically the walk
//! from the station to a place) and an opaque payload. The best trip is the
//! candidate minimizing route time plus extra cost.

use std::collections::HashMap;

use crate::domain::StationCode;

use super::error::RouteError;
use super::path::{PathFinder, Route};

/// A destination considered by the trip optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<P> {
    /// Station the candidate is reached from
    pub station: StationCode,
    /// Cost added on top of the route time, in minutes
    pub extra_cost: f64,
    /// What the candidate describes
    pub payload: P,
}

impl<P> Candidate<P> {
    /// Create a new candidate.
    pub fn new(station: StationCode, extra_cost: f64, payload: P) -> Self {
        Self {
            station,
            extra_cost,
            payload,
        }
    }
}

/// The winning candidate of a trip search.
#[derive(Debug, Clone, PartialEq)]
pub struct TripResult<P> {
    /// Station of the winning candidate
    pub station: StationCode,
    /// Payload of the winning candidate
    pub payload: P,
    /// Route from the origin to `station`
    pub route: Route,
    /// Extra cost of the winning candidate
    pub extra_cost: f64,
    /// Route time plus extra cost
    pub total_cost: f64,
}

/// Finds the cheapest of many candidate destinations.
#[derive(Debug, Clone, Copy)]
pub struct TripOptimizer<'a> {
    finder: PathFinder<'a>,
}

impl<'a> TripOptimizer<'a> {
    /// Create an optimizer using `finder` for routes.
    pub fn new(finder: PathFinder<'a>) -> Self {
        Self { finder }
    }

    /// Find the candidate with the lowest route time plus extra cost.
    ///
    /// Candidates are evaluated in the given order and a later candidate
    /// only wins with a strictly lower total, so the first of several equal
    /// totals is kept. Each distinct station is routed once no matter how
    /// many candidates share it. Candidates whose station is unreachable
    /// from the origin, or missing from the network, are skipped.
    pub fn best_trip<P, I>(
        &self,
        origin: &StationCode,
        candidates: I,
    ) -> Result<TripResult<P>, RouteError>
    where
        I: IntoIterator<Item = Candidate<P>>,
    {
        let network = self.finder.network();
        let tree = self
            .finder
            .tree_from(origin)
            .map_err(|_| RouteError::UnknownOrigin(origin.clone()))?;

        let mut routes: HashMap<StationCode, Option<Route>> = HashMap::new();
        let mut best: Option<TripResult<P>> = None;

        for candidate in candidates {
            let route = routes
                .entry(candidate.station.clone())
                .or_insert_with(|| {
                    network
                        .station_id(&candidate.station)
                        .and_then(|id| tree.route_to(id))
                });

            let Some(route) = route else {
                continue; // Unreachable
            };

            let total_cost = route.total_time + candidate.extra_cost;
            if best.as_ref().is_none_or(|b| total_cost < b.total_cost) {
                best = Some(TripResult {
                    station: candidate.station,
                    payload: candidate.payload,
                    route: route.clone(),
                    extra_cost: candidate.extra_cost,
                    total_cost,
                });
            }
        }

        best.ok_or_else(|| RouteError::NoReachableCandidates {
            origin: origin.clone(),
        })
    }
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationCode;
use crate::planner::{Itinerary, Route, Segment, TripResult};
use crate::places::Place;

/// Request for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station code
    pub origin: String,

    /// Destination station code
    pub destination: String,
}

/// Fastest route between two stations.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited, origin first
    pub best_route: Vec<StationCode>,

    /// Travel time in minutes
    pub time: f64,
}

/// Route broken down into per-line segments.
#[derive(Debug, Serialize)]
pub struct RouteDetailsResponse {
    pub origin: StationCode,
    pub destination: StationCode,
    pub path: Vec<StationCode>,
    pub total_time: f64,
    pub total_stops: usize,
    pub transfers: usize,
    pub segments: Vec<Segment>,
}

/// All stations of the network.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationCode>,
}

/// Request for places near a station.
#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    /// Station code
    pub station: String,

    /// Only places of this type (e.g. "museum", "park")
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Minimum rating, unrated places count as 0
    pub min_rating: Option<f64>,
}

/// Places near a station.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub station: StationCode,
    pub count: usize,
    pub results: Vec<Place>,
}

/// Request for a tour of the best-rated places at a station.
#[derive(Debug, Deserialize)]
pub struct TourRequest {
    /// Station code
    pub station: String,

    /// Maximum number of places (defaults to the configured tour size)
    pub max_places: Option<usize>,

    /// Minimum rating (defaults to the configured tour rating)
    pub min_rating: Option<f64>,
}

/// Best-rated places at a station, highest first.
#[derive(Debug, Serialize)]
pub struct TourResponse {
    pub station: StationCode,
    pub count: usize,
    pub tour: Vec<Place>,
}

/// Request for the best trip from a station.
#[derive(Debug, Deserialize)]
pub struct BestTripRequest {
    /// Origin station code
    pub origin: String,
}

/// Fastest trip to a museum, walk included.
#[derive(Debug, Serialize)]
pub struct BestTripResponse {
    /// Origin station
    pub origin: StationCode,

    /// Station nearest the chosen museum
    pub museum_station: StationCode,

    /// The chosen museum
    pub museum: Place,

    /// Stations visited from origin to `museum_station`
    pub route_path: Vec<StationCode>,

    /// Travel time to `museum_station`, in minutes
    pub route_time: f64,

    /// Walk from `museum_station` to the museum, in minutes
    pub walk_minutes: f64,

    /// Route time plus walk
    pub total_time: f64,
}

/// Service status.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResponse {
    /// Create from a planner Route.
    pub fn from_route(route: Route) -> Self {
        Self {
            best_route: route.path,
            time: route.total_time,
        }
    }
}

impl RouteDetailsResponse {
    /// Create from an itinerary between two stations.
    pub fn from_itinerary(
        origin: StationCode,
        destination: StationCode,
        itinerary: Itinerary,
    ) -> Self {
        Self {
            origin,
            destination,
            path: itinerary.path,
            total_time: itinerary.total_time,
            total_stops: itinerary.total_stops,
            transfers: itinerary.transfers,
            segments: itinerary.segments,
        }
    }
}

impl BestTripResponse {
    /// Create from the winning trip.
    pub fn from_trip(origin: StationCode, trip: TripResult<&Place>) -> Self {
        Self {
            origin,
            museum_station: trip.station,
            museum: trip.payload.clone(),
            route_path: trip.route.path,
            route_time: trip.route.total_time,
            walk_minutes: trip.extra_cost,
            total_time: trip.total_cost,
        }
    }
}

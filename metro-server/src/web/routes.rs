//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::domain::StationCode;
use crate::planner::{Itinerary, PathFinder, RouteError, TripOptimizer};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the directory served under `/static`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stations", get(stations))
        .route("/route", get(route))
        .route("/route/details", get(route_details))
        .route("/recommendations", get(recommendations))
        .route("/recommendations/all", get(all_recommendations))
        .route("/tour/museums", get(museum_tour))
        .route("/tour/best-museum-trip", get(best_museum_trip))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Service status.
async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Backend is running!",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all stations of the network.
async fn stations(State(state): State<AppState>) -> Json<StationsResponse> {
    Json(StationsResponse {
        stations: state.network.stations().to_vec(),
    })
}

/// Parse a station code from a query parameter.
fn parse_station(raw: &str) -> Result<StationCode, AppError> {
    StationCode::parse_normalized(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid station code {:?}: {}", raw, e),
    })
}

/// Fastest route between two stations.
async fn route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let origin = parse_station(&req.origin)?;
    let destination = parse_station(&req.destination)?;

    let route = PathFinder::new(&state.network).shortest_path(&origin, &destination)?;
    debug!(%origin, %destination, time = route.total_time, "route found");

    Ok(Json(RouteResponse::from_route(route)))
}

/// Fastest route with per-line segments and transfer count.
async fn route_details(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteDetailsResponse>, AppError> {
    let origin = parse_station(&req.origin)?;
    let destination = parse_station(&req.destination)?;

    let route = PathFinder::new(&state.network).shortest_path(&origin, &destination)?;
    let itinerary = Itinerary::from_route(&state.network, route);
    debug!(
        %origin,
        %destination,
        transfers = itinerary.transfers,
        "route details found"
    );

    Ok(Json(RouteDetailsResponse::from_itinerary(
        origin,
        destination,
        itinerary,
    )))
}

/// Places near a station, optionally filtered by type and rating.
async fn recommendations(
    State(state): State<AppState>,
    Query(req): Query<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let station = parse_station(&req.station)?;

    let results: Vec<_> = state
        .catalog
        .filter(
            &station,
            req.kind.as_deref(),
            req.min_rating.unwrap_or(0.0),
        )
        .ok_or_else(no_recommendations)?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(RecommendationsResponse {
        station,
        count: results.len(),
        results,
    }))
}

/// The whole place catalog.
async fn all_recommendations(State(state): State<AppState>) -> Response {
    Json(state.catalog.as_ref()).into_response()
}

/// Best-rated museums at a station.
async fn museum_tour(
    State(state): State<AppState>,
    Query(req): Query<TourRequest>,
) -> Result<Json<TourResponse>, AppError> {
    let station = parse_station(&req.station)?;

    let tour: Vec<_> = state
        .catalog
        .tour(
            &station,
            &state.tour.kind,
            req.min_rating.unwrap_or(state.tour.min_rating),
            req.max_places.unwrap_or(state.tour.max_places),
        )
        .ok_or_else(no_recommendations)?
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(TourResponse {
        station,
        count: tour.len(),
        tour,
    }))
}

/// Fastest trip from a station to any museum, walk included.
async fn best_museum_trip(
    State(state): State<AppState>,
    Query(req): Query<BestTripRequest>,
) -> Result<Json<BestTripResponse>, AppError> {
    let origin = parse_station(&req.origin)?;

    let candidates = state.catalog.candidates_of_kind(&state.tour.kind);
    let optimizer = TripOptimizer::new(PathFinder::new(&state.network));

    let trip = optimizer
        .best_trip(&origin, candidates)
        .map_err(|e| match e {
            RouteError::NoReachableCandidates { .. } => AppError::NotFound {
                message: format!("No reachable {}s found", state.tour.kind),
            },
            other => AppError::from(other),
        })?;
    debug!(
        %origin,
        station = %trip.station,
        total = trip.total_cost,
        "best trip found"
    );

    Ok(Json(BestTripResponse::from_trip(origin, trip)))
}

fn no_recommendations() -> AppError {
    AppError::NotFound {
        message: "No recommendations for this station".to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(code) => AppError::BadRequest {
                message: format!("Unknown station name: {}", code),
            },
            RouteError::NoPath { .. } => AppError::BadRequest {
                message: "No path between these stations".to_string(),
            },
            RouteError::UnknownOrigin(code) => AppError::BadRequest {
                message: format!("Unknown origin station: {}", code),
            },
            RouteError::NoReachableCandidates { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = status.as_u16(), "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TourConfig;
    use crate::network::{EdgeRecord, Network};
    use crate::places::{Place, PlaceCatalog};

    fn state() -> AppState {
        let network = Network::build(vec![
            EdgeRecord::new("A", "B", 5.0, Some("M1")),
            EdgeRecord::new("B", "C", 5.0, Some("M1")),
            EdgeRecord::new("C", "D", 5.0, Some("M2")),
            EdgeRecord::new("Y", "Z", 1.0, Some("M9")),
        ])
        .unwrap();

        let catalog = PlaceCatalog::from_entries(vec![
            (
                "C".to_string(),
                vec![
                    Place::new("museum")
                        .with_rating(4.1)
                        .with_walk_minutes(2.0)
                        .with_field("name", "Harbour"),
                    Place::new("park").with_rating(4.9),
                ],
            ),
            (
                "D".to_string(),
                vec![
                    Place::new("museum")
                        .with_rating(4.8)
                        .with_field("name", "Modern"),
                    Place::new("museum")
                        .with_rating(4.5)
                        .with_field("name", "Old"),
                    Place::new("museum")
                        .with_rating(3.0)
                        .with_field("name", "Tiny"),
                    Place::new("museum")
                        .with_rating(4.6)
                        .with_field("name", "Maritime"),
                ],
            ),
            (
                "Z".to_string(),
                vec![Place::new("museum").with_field("name", "Island")],
            ),
        ])
        .unwrap();

        AppState::new(network, catalog, TourConfig::default())
    }

    fn route_req(origin: &str, destination: &str) -> Query<RouteRequest> {
        Query(RouteRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    fn name(place: &Place) -> &str {
        place.extra["name"].as_str().unwrap()
    }

    #[tokio::test]
    async fn route_normalizes_codes() {
        let Json(resp) = route(State(state()), route_req("a", " d ")).await.unwrap();

        let path: Vec<_> = resp.best_route.iter().map(|s| s.as_str()).collect();
        assert_eq!(path, vec!["A", "B", "C", "D"]);
        assert_eq!(resp.time, 15.0);
    }

    #[tokio::test]
    async fn route_unknown_station_is_bad_request() {
        let err = route(State(state()), route_req("A", "Q")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn route_no_path_is_bad_request() {
        let err = route(State(state()), route_req("A", "Z")).await.unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "No path between these stations")
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn route_empty_code_is_bad_request() {
        let err = route(State(state()), route_req("", "A")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn route_details_segments() {
        let Json(resp) = route_details(State(state()), route_req("A", "D"))
            .await
            .unwrap();

        assert_eq!(resp.total_time, 15.0);
        assert_eq!(resp.total_stops, 3);
        assert_eq!(resp.transfers, 1);
        assert_eq!(resp.segments.len(), 2);
        assert_eq!(resp.segments[0].line, "M1");
        assert_eq!(resp.segments[0].stops, 2);
        assert_eq!(resp.segments[1].from.as_str(), "C");
    }

    #[tokio::test]
    async fn stations_in_network_order() {
        let Json(resp) = stations(State(state())).await;
        let codes: Vec<_> = resp.stations.iter().map(|s| s.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C", "D", "Y", "Z"]);
    }

    #[tokio::test]
    async fn recommendations_filtered() {
        let req = RecommendationsRequest {
            station: "d".to_string(),
            kind: Some("museum".to_string()),
            min_rating: Some(4.5),
        };

        let Json(resp) = recommendations(State(state()), Query(req)).await.unwrap();

        assert_eq!(resp.station.as_str(), "D");
        assert_eq!(resp.count, 3);
        let names: Vec<_> = resp.results.iter().map(name).collect();
        assert_eq!(names, vec!["Modern", "Old", "Maritime"]);
    }

    #[tokio::test]
    async fn recommendations_unknown_station_is_not_found() {
        let req = RecommendationsRequest {
            station: "B".to_string(),
            kind: None,
            min_rating: None,
        };

        let err = recommendations(State(state()), Query(req))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn museum_tour_uses_defaults() {
        let req = TourRequest {
            station: "D".to_string(),
            max_places: None,
            min_rating: None,
        };

        let Json(resp) = museum_tour(State(state()), Query(req)).await.unwrap();

        let names: Vec<_> = resp.tour.iter().map(name).collect();
        assert_eq!(names, vec!["Modern", "Maritime", "Old"]);
        assert_eq!(resp.count, 3);
    }

    #[tokio::test]
    async fn museum_tour_custom_limits() {
        let req = TourRequest {
            station: "D".to_string(),
            max_places: Some(10),
            min_rating: Some(0.0),
        };

        let Json(resp) = museum_tour(State(state()), Query(req)).await.unwrap();

        assert_eq!(resp.count, 4);
        assert_eq!(name(&resp.tour[3]), "Tiny");
    }

    #[tokio::test]
    async fn best_trip_adds_walk() {
        let req = BestTripRequest {
            origin: "a".to_string(),
        };

        let Json(resp) = best_museum_trip(State(state()), Query(req)).await.unwrap();

        // C: 10 + 2 beats D: 15 + 0; Z is unreachable
        assert_eq!(resp.museum_station.as_str(), "C");
        assert_eq!(name(&resp.museum), "Harbour");
        assert_eq!(resp.route_time, 10.0);
        assert_eq!(resp.walk_minutes, 2.0);
        assert_eq!(resp.total_time, 12.0);
        assert_eq!(resp.route_path.len(), 3);
    }

    #[tokio::test]
    async fn best_trip_unknown_origin_is_bad_request() {
        let req = BestTripRequest {
            origin: "Q".to_string(),
        };

        let err = best_museum_trip(State(state()), Query(req))
            .await
            .unwrap_err();

        match err {
            AppError::BadRequest { message } => assert_eq!(message, "Unknown origin station: Q"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn best_trip_nothing_reachable_is_not_found() {
        let state = state();
        let state = AppState::new(
            state.network.as_ref().clone(),
            state.catalog.as_ref().clone(),
            TourConfig::new("aquarium", 3, 4.0),
        );
        let req = BestTripRequest {
            origin: "A".to_string(),
        };

        let err = best_museum_trip(State(state), Query(req)).await.unwrap_err();

        match err {
            AppError::NotFound { message } => assert_eq!(message, "No reachable aquariums found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn all_recommendations_returns_ok() {
        let resp = all_recommendations(State(state())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn root_reports_status() {
        let Json(resp) = root().await;
        assert_eq!(resp.status, "Backend is running!");
        assert_eq!(health().await, "ok");
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state(), Path::new("static"));
    }
}

use metro_server::config::{ServerConfig, TourConfig};
use metro_server::loader::{load_catalog, load_network};
use metro_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();

    // Load datasets (fail fast if unavailable)
    let network = load_network(&config.graph_path).expect("Failed to load metro network");
    info!(
        stations = network.station_count(),
        edges = network.edge_count(),
        path = %config.graph_path.display(),
        "loaded metro network"
    );

    let catalog = load_catalog(&config.places_path).expect("Failed to load place catalog");
    info!(
        stations = catalog.len(),
        places = catalog.place_count(),
        path = %config.places_path.display(),
        "loaded place catalog"
    );

    // Build app state
    let state = AppState::new(network, catalog, TourConfig::default());

    // Create router
    let app = create_router(state, &config.static_dir);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Metro planner listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /stations                 - All stations");
    info!("  GET  /route                    - Fastest route");
    info!("  GET  /route/details            - Route with per-line segments");
    info!("  GET  /recommendations          - Places near a station");
    info!("  GET  /recommendations/all      - All places");
    info!("  GET  /tour/museums             - Best-rated museums at a station");
    info!("  GET  /tour/best-museum-trip    - Fastest museum trip");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

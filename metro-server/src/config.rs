//! Server and tour configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Environment variable naming the network file.
pub const GRAPH_PATH_VAR: &str = "METRO_GRAPH_PATH";
/// Environment variable naming the place catalog file.
pub const PLACES_PATH_VAR: &str = "METRO_PLACES_PATH";
/// Environment variable naming the static assets directory.
pub const STATIC_DIR_VAR: &str = "METRO_STATIC_DIR";
/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Where the server reads its data and listens.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Network file (`{"edges": [...]}`).
    pub graph_path: PathBuf,

    /// Place catalog file (`{"A": [...]}`).
    pub places_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Socket address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    ///
    /// Unset variables take their default value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(
                    value = %raw,
                    error = %e,
                    "invalid {BIND_ADDR_VAR}, using {}",
                    defaults.bind_addr
                );
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        Self {
            graph_path: lookup(GRAPH_PATH_VAR).map_or(defaults.graph_path, PathBuf::from),
            places_path: lookup(PLACES_PATH_VAR).map_or(defaults.places_path, PathBuf::from),
            static_dir: lookup(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
            bind_addr,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("data/metro_graph.json"),
            places_path: PathBuf::from("data/recommendations.json"),
            static_dir: PathBuf::from("static"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Parameters of the museum tour and best-trip endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct TourConfig {
    /// Kind of place searched for.
    pub kind: String,

    /// Default number of places in a tour.
    pub max_places: usize,

    /// Default minimum rating of a tour place.
    pub min_rating: f64,
}

impl TourConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(kind: &str, max_places: usize, min_rating: f64) -> Self {
        Self {
            kind: kind.to_string(),
            max_places,
            min_rating,
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self::new("museum", 3, 4.0)
    }
}

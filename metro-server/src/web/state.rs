//! Application state for the web layer.

use std::sync::Arc;

use crate::config::TourConfig;
use crate::network::Network;
use crate::places::PlaceCatalog;

/// Shared application state.
///
/// Everything in here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Transit network
    pub network: Arc<Network>,

    /// Places near stations
    pub catalog: Arc<PlaceCatalog>,

    /// Tour and best-trip parameters
    pub tour: Arc<TourConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, catalog: PlaceCatalog, tour: TourConfig) -> Self {
        Self {
            network: Arc::new(network),
            catalog: Arc::new(catalog),
            tour: Arc::new(tour),
        }
    }
}

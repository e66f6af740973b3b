//! Web layer for the metro planner.
//!
//! Provides HTTP endpoints for routes, itineraries, recommendations and
//! trip search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

//! Web layer for the interconnecting flights service.
//!
//! Provides the HTTP endpoint for searching direct and one-stop
//! itineraries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

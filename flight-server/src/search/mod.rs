//! Itinerary resolution engine.
//!
//! Answers: "which direct and one-stop itineraries exist between two
//! airports inside this time window?" The engine is pure data
//! transformation over two upstream fetches (route catalogue, per-month
//! schedules), supplied through the [`FlightApi`] trait.

mod config;
mod connect;
mod engine;
mod months;
mod routes;
mod window;

pub use config::SearchConfig;
pub use connect::{earliest_departure_after, match_connections};
pub use engine::{FlightApi, FlightSearcher, SearchError, SearchRequest};
pub use months::months_spanning;
pub use routes::{resolve_routes, RouteDetails};
pub use window::{flights_within_window, ScheduleParseError, SearchWindow};

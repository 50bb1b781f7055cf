//! Application state for the web layer.

use std::sync::Arc;

use crate::ryanair::RyanairClient;
use crate::search::{FlightSearcher, SearchConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The itinerary search engine, wired to the Ryanair API.
    pub searcher: Arc<FlightSearcher<RyanairClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(client: RyanairClient, config: SearchConfig) -> Self {
        Self {
            searcher: Arc::new(FlightSearcher::new(client, config)),
        }
    }
}

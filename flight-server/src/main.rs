use std::net::SocketAddr;

use flight_server::ryanair::{RyanairClient, RyanairConfig};
use flight_server::search::SearchConfig;
use flight_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Point at a different upstream host (e.g. a stub) via the environment
    let mut ryanair_config = RyanairConfig::new();
    if let Ok(base_url) = std::env::var("RYANAIR_BASE_URL") {
        ryanair_config = ryanair_config.with_base_url(base_url);
    }
    let client = RyanairClient::new(ryanair_config).expect("Failed to create Ryanair client");

    let search_config = SearchConfig::default();
    let state = AppState::new(client, search_config);
    let app = create_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Flight interconnection server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                          - Health check");
    println!("  GET /api/v1/flight/interconnections  - Search itineraries");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDateTime;

use crate::domain::Iata;
use crate::search::{SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/flight/interconnections", get(interconnections))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for direct and one-stop itineraries.
///
/// A search that finds nothing is a normal outcome: 200 with an empty
/// list. 400 covers malformed parameters, an unusable window and an
/// unconnected airport pair; 503 means the route catalogue was
/// unreachable.
async fn interconnections(
    State(state): State<AppState>,
    Query(req): Query<InterconnectionsQuery>,
) -> Result<Json<Vec<ItineraryDto>>, AppError> {
    let origin = Iata::parse_normalized(&req.departure).map_err(|_| AppError::BadRequest {
        message: format!("Invalid departure airport: {}", req.departure),
    })?;
    let destination = Iata::parse_normalized(&req.arrival).map_err(|_| AppError::BadRequest {
        message: format!("Invalid arrival airport: {}", req.arrival),
    })?;
    let departure = parse_datetime(&req.departure_date_time)?;
    let arrival = parse_datetime(&req.arrival_date_time)?;

    let request = SearchRequest {
        origin,
        destination,
        departure,
        arrival,
    };

    let itineraries = state.searcher.find_itineraries(&request).await?;

    Ok(Json(itineraries.iter().map(ItineraryDto::from).collect()))
}

/// Parse a "YYYY-MM-DDTHH:MM" query datetime, tolerating trailing seconds.
fn parse_datetime(value: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::BadRequest {
            message: format!("Invalid datetime: {value}"),
        })
}

/// Application error type for HTTP responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    ServiceUnavailable { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRange { .. }
            | SearchError::RangeTooWide { .. }
            | SearchError::NoRouteFound { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::Upstream { .. } => AppError::ServiceUnavailable {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::ServiceUnavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

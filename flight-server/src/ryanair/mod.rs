//! Ryanair public API client.
//!
//! This module provides an HTTP client for the two upstream endpoints the
//! search depends on:
//! - the route catalogue (`/views/locate/3/routes`), fetched whole
//! - per-month schedules for one city pair
//!   (`/timtbl/3/schedules/{from}/{to}/years/{year}/months/{month}`)
//!
//! Schedule times are local "HH:MM" strings; the calendar context is the
//! (year, month) in the request path, not anything in the response body.

mod client;
mod error;
mod types;

pub use client::{RyanairClient, RyanairConfig};
pub use error::ApiError;
pub use types::RouteRecord;

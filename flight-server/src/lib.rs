//! Flight interconnection search server.
//!
//! A web service that answers: "which direct and one-stop Ryanair
//! itineraries exist between two airports inside this time window?"

pub mod domain;
pub mod ryanair;
pub mod search;
pub mod web;

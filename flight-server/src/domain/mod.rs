//! Domain types for the flight interconnection search.
//!
//! This module contains the core domain model types that represent
//! validated flight data. Types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod airport;
mod flight;
mod itinerary;
mod months;
mod route;
mod schedule;

pub use airport::{Iata, InvalidIata};
pub use flight::ResolvedFlight;
pub use itinerary::{Itinerary, Leg};
pub use months::{InvalidMonth, YearMonth};
pub use route::{ConnectingRoute, MismatchedLegs, Route, RYANAIR_OPERATOR};
pub use schedule::{DaySchedule, MonthSchedule, ScheduleEntry};

//! Itineraries and their legs.

use chrono::NaiveDateTime;

use super::Iata;

/// One concrete segment of an itinerary.
///
/// Two legs are equal iff all four fields match; this equality (and the
/// matching `Hash`) is the basis for result deduplication — the same
/// physical flight must not appear in two accepted itineraries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leg {
    /// Airport the leg departs from.
    pub departure_airport: Iata,

    /// Airport the leg arrives at.
    pub arrival_airport: Iata,

    /// Absolute local departure timestamp.
    pub departure_time: NaiveDateTime,

    /// Absolute local arrival timestamp.
    pub arrival_time: NaiveDateTime,
}

/// A complete itinerary: zero stops (one leg) or one stop (two legs).
///
/// Itineraries are terminal output. They are constructed once by the
/// assembly stage and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    stops: u32,
    legs: Vec<Leg>,
}

impl Itinerary {
    /// A direct itinerary with a single leg.
    pub fn direct(leg: Leg) -> Self {
        Self {
            stops: 0,
            legs: vec![leg],
        }
    }

    /// A one-stop itinerary, legs ordered departing-then-arriving.
    pub fn one_stop(first: Leg, second: Leg) -> Self {
        Self {
            stops: 1,
            legs: vec![first, second],
        }
    }

    /// Number of intermediate stops (0 or 1).
    pub fn stops(&self) -> u32 {
        self.stops
    }

    /// The legs, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }
}

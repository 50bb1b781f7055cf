//! Operator-served routes between airports.

use super::Iata;

/// The only operator whose routes are searchable.
pub const RYANAIR_OPERATOR: &str = "RYANAIR";

/// One operator-served city pair from the route catalogue.
///
/// Immutable once fetched. Only *eligible* routes (see [`Route::is_eligible`])
/// take part in itinerary resolution; the rest of the catalogue record
/// (carrier code, grouping, seasonal flags) stays on the wire type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Departure airport.
    pub origin: Iata,

    /// Arrival airport.
    pub destination: Iata,

    /// Operating carrier name, as reported by the catalogue.
    pub operator: String,

    /// Set when the catalogue entry itself represents a via-airport
    /// connection. Such entries are never searched directly.
    pub connecting_airport: Option<Iata>,
}

impl Route {
    /// A route is eligible only when operated by Ryanair and not itself a
    /// connecting entry.
    pub fn is_eligible(&self) -> bool {
        self.connecting_airport.is_none() && self.operator == RYANAIR_OPERATOR
    }
}

/// Error returned when a connecting route's legs do not share an airport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("connecting route legs do not meet: first arrives {first_arrives}, second departs {second_departs}")]
pub struct MismatchedLegs {
    first_arrives: Iata,
    second_departs: Iata,
}

/// A one-stop route candidate: two routes meeting at an intermediate airport.
///
/// # Invariants
///
/// - `first_leg.destination == second_leg.origin` (validated at construction)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectingRoute {
    first_leg: Route,
    second_leg: Route,
}

impl ConnectingRoute {
    /// Construct a connecting route, validating the legs meet at one airport.
    pub fn new(first_leg: Route, second_leg: Route) -> Result<Self, MismatchedLegs> {
        if first_leg.destination != second_leg.origin {
            return Err(MismatchedLegs {
                first_arrives: first_leg.destination,
                second_departs: second_leg.origin,
            });
        }
        Ok(Self {
            first_leg,
            second_leg,
        })
    }

    /// The departing leg.
    pub fn first_leg(&self) -> &Route {
        &self.first_leg
    }

    /// The arriving leg.
    pub fn second_leg(&self) -> &Route {
        &self.second_leg
    }

    /// The intermediate airport where the legs meet.
    pub fn via(&self) -> Iata {
        self.second_leg.origin
    }
}

//! Connection matching for one-stop itineraries.
//!
//! Pairs each departing-leg flight with the earliest arriving-leg flight
//! that leaves at least the minimum layover after it lands, then drops
//! pairs whose legs were already chosen for an earlier itinerary.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::domain::{ConnectingRoute, Itinerary, Leg, ResolvedFlight, Route};

/// The earliest flight departing at or after `cutoff`.
///
/// This is the "closest eligible connection" rule as a pure fold: among
/// flights with `departure >= cutoff`, pick the minimal departure. Ties
/// keep the first flight in input order. Returns `None` when no flight
/// is eligible.
pub fn earliest_departure_after(
    cutoff: NaiveDateTime,
    flights: &[ResolvedFlight],
) -> Option<&ResolvedFlight> {
    flights.iter().fold(None, |best, candidate| {
        if candidate.departure < cutoff {
            return best;
        }
        match best {
            Some(current) if current.departure <= candidate.departure => best,
            _ => Some(candidate),
        }
    })
}

/// Match departing-leg flights against arriving-leg flights for one
/// connecting-route candidate and one queried month.
///
/// Each departing flight is paired with the earliest arriving flight
/// departing no sooner than `min_layover` after it lands. A pair is
/// discarded when either of its legs already appears in `seen`, which
/// accumulates across candidates (and is seeded with the direct legs), so
/// one physical flight never appears in two accepted itineraries.
pub fn match_connections(
    route: &ConnectingRoute,
    departing: &[ResolvedFlight],
    arriving: &[ResolvedFlight],
    min_layover: Duration,
    seen: &mut HashSet<Leg>,
) -> Vec<Itinerary> {
    let mut matched = Vec::new();

    for departing_flight in departing {
        let cutoff = departing_flight.arrival + min_layover;
        let Some(arriving_flight) = earliest_departure_after(cutoff, arriving) else {
            continue;
        };

        let first = leg_of(route.first_leg(), departing_flight);
        let second = leg_of(route.second_leg(), arriving_flight);

        if seen.contains(&first) || seen.contains(&second) {
            continue;
        }
        seen.insert(first.clone());
        seen.insert(second.clone());
        matched.push(Itinerary::one_stop(first, second));
    }

    matched
}

/// A leg carrying the airports of its originating route.
fn leg_of(route: &Route, flight: &ResolvedFlight) -> Leg {
    Leg {
        departure_airport: route.origin,
        arrival_airport: route.destination,
        departure_time: flight.departure,
        arrival_time: flight.arrival,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    proptest! {
        /// The chosen flight always satisfies the layover rule and no
        /// eligible flight departs earlier than it.
        #[test]
        fn chosen_flight_is_minimal_eligible(
            offsets in proptest::collection::vec(0i64..2880, 1..20),
            cutoff_min in 0i64..2880,
        ) {
            let flights: Vec<ResolvedFlight> = offsets
                .iter()
                .map(|&m| ResolvedFlight {
                    carrier_code: None,
                    number: "1".to_string(),
                    departure: base() + Duration::minutes(m),
                    arrival: base() + Duration::minutes(m + 75),
                })
                .collect();

            let cutoff = base() + Duration::minutes(cutoff_min);
            match earliest_departure_after(cutoff, &flights) {
                Some(chosen) => {
                    prop_assert!(chosen.departure >= cutoff);
                    for flight in &flights {
                        if flight.departure >= cutoff {
                            prop_assert!(chosen.departure <= flight.departure);
                        }
                    }
                }
                None => {
                    prop_assert!(flights.iter().all(|f| f.departure < cutoff));
                }
            }
        }
    }
}

//! Route-graph resolution.
//!
//! Derives the direct route and every one-hop connecting pair for an
//! airport pair from the flat route catalogue. Exactly one intermediate
//! airport is considered; longer paths are out of scope.

use crate::domain::{ConnectingRoute, Iata, Route};

use super::engine::SearchError;

/// The routes worth searching for one airport pair.
#[derive(Debug, Clone)]
pub struct RouteDetails {
    /// The direct route, when one exists.
    pub direct: Option<Route>,

    /// Every one-hop connecting candidate, in catalogue order.
    pub connecting: Vec<ConnectingRoute>,
}

/// Resolve the direct route and all one-hop connecting candidates.
///
/// Only eligible routes (Ryanair-operated, no connecting airport on the
/// catalogue entry) take part. The connecting scan is O(N²) over the
/// catalogue, which is fine at typical catalogue sizes (low hundreds).
/// Should the catalogue carry several direct entries for one pair, the
/// first in catalogue order wins; the upstream data does not distinguish
/// them further.
///
/// # Errors
///
/// Returns `SearchError::NoRouteFound` when neither a direct route nor any
/// connecting candidate exists.
pub fn resolve_routes(
    routes: &[Route],
    origin: &Iata,
    destination: &Iata,
) -> Result<RouteDetails, SearchError> {
    let eligible: Vec<&Route> = routes.iter().filter(|r| r.is_eligible()).collect();

    let direct = eligible
        .iter()
        .find(|r| r.origin == *origin && r.destination == *destination)
        .map(|r| (*r).clone());

    let mut connecting = Vec::new();
    for first in &eligible {
        if first.origin != *origin {
            continue;
        }
        for second in &eligible {
            if second.origin == first.destination && second.destination == *destination {
                // Eligible routes always meet here, by the filter above.
                if let Ok(pair) = ConnectingRoute::new((*first).clone(), (*second).clone()) {
                    connecting.push(pair);
                }
            }
        }
    }

    if direct.is_none() && connecting.is_empty() {
        return Err(SearchError::NoRouteFound {
            origin: *origin,
            destination: *destination,
        });
    }

    Ok(RouteDetails { direct, connecting })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RYANAIR_OPERATOR;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn route(from: &str, to: &str) -> Route {
        Route {
            origin: iata(from),
            destination: iata(to),
            operator: RYANAIR_OPERATOR.to_string(),
            connecting_airport: None,
        }
    }

    fn via_route(from: &str, to: &str, via: &str) -> Route {
        Route {
            connecting_airport: Some(iata(via)),
            ..route(from, to)
        }
    }

    fn other_operator(from: &str, to: &str) -> Route {
        Route {
            operator: "LAUDA".to_string(),
            ..route(from, to)
        }
    }

    #[test]
    fn finds_direct_route() {
        let routes = vec![route("DUB", "STN"), route("STN", "DUB")];
        let details = resolve_routes(&routes, &iata("DUB"), &iata("STN")).unwrap();

        assert_eq!(details.direct.unwrap(), route("DUB", "STN"));
        assert!(details.connecting.is_empty());
    }

    #[test]
    fn finds_one_hop_candidates() {
        let routes = vec![
            route("DUB", "ORK"),
            route("ORK", "STN"),
            route("DUB", "MAD"),
            route("MAD", "STN"),
        ];
        let details = resolve_routes(&routes, &iata("DUB"), &iata("STN")).unwrap();

        assert!(details.direct.is_none());
        assert_eq!(details.connecting.len(), 2);
        assert_eq!(details.connecting[0].via(), iata("ORK"));
        assert_eq!(details.connecting[1].via(), iata("MAD"));
    }

    #[test]
    fn direct_and_connecting_coexist() {
        let routes = vec![route("DUB", "STN"), route("DUB", "ORK"), route("ORK", "STN")];
        let details = resolve_routes(&routes, &iata("DUB"), &iata("STN")).unwrap();

        assert!(details.direct.is_some());
        assert_eq!(details.connecting.len(), 1);
    }

    #[test]
    fn ineligible_routes_never_resolve() {
        // Candidates exist structurally, but none are eligible.
        let routes = vec![
            via_route("DUB", "STN", "ORK"),
            other_operator("DUB", "ORK"),
            via_route("ORK", "STN", "MAD"),
        ];
        let result = resolve_routes(&routes, &iata("DUB"), &iata("STN"));

        assert!(matches!(result, Err(SearchError::NoRouteFound { .. })));
    }

    #[test]
    fn ineligible_leg_excludes_candidate() {
        let routes = vec![route("DUB", "ORK"), other_operator("ORK", "STN"), route("ORK", "BRS")];
        let result = resolve_routes(&routes, &iata("DUB"), &iata("STN"));

        // The only path to STN goes through an ineligible leg.
        assert!(matches!(result, Err(SearchError::NoRouteFound { .. })));
    }

    #[test]
    fn candidates_satisfy_one_hop_closure() {
        let routes = vec![
            route("DUB", "ORK"),
            route("ORK", "STN"),
            route("ORK", "BRS"),
            route("BRS", "STN"),
            route("DUB", "BRS"),
        ];
        let details = resolve_routes(&routes, &iata("DUB"), &iata("STN")).unwrap();

        for pair in &details.connecting {
            assert_eq!(pair.first_leg().origin, iata("DUB"));
            assert_eq!(pair.second_leg().destination, iata("STN"));
            assert_eq!(pair.first_leg().destination, pair.second_leg().origin);
        }
        assert_eq!(details.connecting.len(), 2);
    }

    #[test]
    fn unrelated_pair_has_no_route() {
        let routes = vec![route("DUB", "STN")];
        let result = resolve_routes(&routes, &iata("MAD"), &iata("BCN"));

        assert!(matches!(
            result,
            Err(SearchError::NoRouteFound { origin, destination })
                if origin == iata("MAD") && destination == iata("BCN")
        ));
    }

    #[test]
    fn first_direct_match_wins() {
        // Duplicate catalogue entries for the same pair: first one is kept.
        let mut dup = route("DUB", "STN");
        dup.operator = RYANAIR_OPERATOR.to_string();
        let routes = vec![route("DUB", "STN"), dup];

        let details = resolve_routes(&routes, &iata("DUB"), &iata("STN")).unwrap();
        assert_eq!(details.direct.unwrap(), routes[0]);
    }
}

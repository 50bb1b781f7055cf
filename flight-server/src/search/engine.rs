//! Search orchestration: routes, schedules, matching, assembly.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use futures::future::join_all;

use crate::domain::{Iata, Itinerary, Leg, MonthSchedule, ResolvedFlight, Route, YearMonth};

use super::config::SearchConfig;
use super::connect::match_connections;
use super::months::months_spanning;
use super::routes::resolve_routes;
use super::window::{flights_within_window, SearchWindow};

/// Errors a search can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The requested window is empty or inverted.
    #[error("departure {departure} is not strictly before arrival {arrival}")]
    InvalidRange {
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },

    /// The requested window spans more calendar months than allowed.
    #[error("window spans {months} calendar months, limit is {max}")]
    RangeTooWide { months: usize, max: usize },

    /// No eligible route, direct or one-stop, links the two airports.
    #[error("no route found from {origin} to {destination}")]
    NoRouteFound { origin: Iata, destination: Iata },

    /// Upstream flight data could not be fetched.
    #[error("upstream unavailable: {message}")]
    Upstream { message: String },
}

/// One itinerary search, parsed and validated at the web layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: Iata,
    pub destination: Iata,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
}

impl SearchRequest {
    fn window(&self) -> SearchWindow {
        SearchWindow {
            departure: self.departure,
            arrival: self.arrival,
        }
    }
}

/// Trait for fetching the route catalogue and monthly schedules.
///
/// This abstraction allows the searcher to be tested with mock data.
pub trait FlightApi {
    /// Get the full route catalogue.
    async fn fetch_routes(&self) -> Result<Vec<Route>, SearchError>;

    /// Get one month of schedules for one city pair.
    async fn fetch_schedule(
        &self,
        origin: &Iata,
        destination: &Iata,
        month: YearMonth,
    ) -> Result<MonthSchedule, SearchError>;
}

/// The itinerary search engine.
///
/// Stateless apart from its API handle and configuration; a single
/// instance serves all requests.
pub struct FlightSearcher<A> {
    api: A,
    config: SearchConfig,
}

impl<A: FlightApi> FlightSearcher<A> {
    pub fn new(api: A, config: SearchConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Find all direct and one-stop itineraries inside the request window.
    ///
    /// Direct itineraries come first, in month and schedule order, then
    /// one-stop itineraries grouped by connecting airport. An exhaustive
    /// search that matches nothing is `Ok` with an empty vec; errors are
    /// reserved for bad requests and an unreachable upstream (the route
    /// catalogue, or every schedule fetch at once).
    pub async fn find_itineraries(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Itinerary>, SearchError> {
        let months = months_spanning(request.departure, request.arrival)?;
        if months.len() > self.config.max_months {
            return Err(SearchError::RangeTooWide {
                months: months.len(),
                max: self.config.max_months,
            });
        }

        let routes = self.api.fetch_routes().await?;
        let details = resolve_routes(&routes, &request.origin, &request.destination)?;
        let window = request.window();

        let mut seen: HashSet<Leg> = HashSet::new();
        let mut itineraries = Vec::new();
        let mut fetches = FetchTally::default();

        if let Some(direct) = &details.direct {
            let per_month = join_all(months.iter().map(|&month| {
                self.month_flights(&direct.origin, &direct.destination, month, window)
            }))
            .await;

            for result in per_month {
                for flight in fetches.absorb(result) {
                    let leg = leg_of(direct, &flight);
                    if seen.insert(leg.clone()) {
                        itineraries.push(Itinerary::direct(leg));
                    }
                }
            }
        }

        for candidate in &details.connecting {
            // Both legs of every month are fetched concurrently; matching
            // then runs month by month, so a connection never spans the
            // boundary between two queried months.
            let per_month = join_all(months.iter().map(|&month| async move {
                let first = candidate.first_leg();
                let second = candidate.second_leg();
                futures::join!(
                    self.month_flights(&first.origin, &first.destination, month, window),
                    self.month_flights(&second.origin, &second.destination, month, window),
                )
            }))
            .await;

            for (departing, arriving) in per_month {
                let departing = fetches.absorb(departing);
                let arriving = fetches.absorb(arriving);
                itineraries.extend(match_connections(
                    candidate,
                    &departing,
                    &arriving,
                    self.config.min_layover(),
                    &mut seen,
                ));
            }
        }

        // A month that fails to fetch only degrades to empty while some
        // other fetch succeeded; when every single one failed, the upstream
        // is down and an empty result would be a lie.
        if fetches.all_failed() {
            return Err(SearchError::Upstream {
                message: "every schedule fetch failed".to_string(),
            });
        }

        Ok(itineraries)
    }

    /// One month of in-window flights for one city pair.
    ///
    /// An unparseable body drops that month from the search; a failed
    /// fetch is surfaced so the caller can tell partial from total
    /// upstream failure.
    async fn month_flights(
        &self,
        origin: &Iata,
        destination: &Iata,
        month: YearMonth,
        window: SearchWindow,
    ) -> Result<Vec<ResolvedFlight>, SearchError> {
        let schedule = match self.api.fetch_schedule(origin, destination, month).await {
            Ok(schedule) => schedule,
            Err(error) => {
                tracing::warn!(%origin, %destination, %month, %error, "skipping month: schedule fetch failed");
                return Err(error);
            }
        };

        match flights_within_window(&schedule, month, window) {
            Ok(flights) => Ok(flights),
            Err(error) => {
                tracing::warn!(%origin, %destination, %month, %error, "skipping month: malformed schedule");
                Ok(Vec::new())
            }
        }
    }
}

/// Outcome counts of the schedule fetches issued by one search.
#[derive(Default)]
struct FetchTally {
    issued: usize,
    failed: usize,
}

impl FetchTally {
    /// Record one fetch outcome, degrading a failure to an empty month.
    fn absorb(&mut self, result: Result<Vec<ResolvedFlight>, SearchError>) -> Vec<ResolvedFlight> {
        self.issued += 1;
        match result {
            Ok(flights) => flights,
            Err(_) => {
                self.failed += 1;
                Vec::new()
            }
        }
    }

    fn all_failed(&self) -> bool {
        self.issued > 0 && self.failed == self.issued
    }
}

fn leg_of(route: &Route, flight: &ResolvedFlight) -> Leg {
    Leg {
        departure_airport: route.origin,
        arrival_airport: route.destination,
        departure_time: flight.departure,
        arrival_time: flight.arrival,
    }
}

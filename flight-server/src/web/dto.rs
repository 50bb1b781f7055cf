//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg};

/// Wire format for datetimes, e.g. "2024-06-20T07:00".
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Query parameters of the interconnections endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterconnectionsQuery {
    /// Departure airport IATA code
    pub departure: String,

    /// Arrival airport IATA code
    pub arrival: String,

    /// Earliest acceptable departure, "YYYY-MM-DDTHH:MM"
    pub departure_date_time: String,

    /// Latest acceptable arrival, "YYYY-MM-DDTHH:MM"
    pub arrival_date_time: String,
}

/// One itinerary in the response.
#[derive(Debug, Serialize)]
pub struct ItineraryDto {
    /// Number of intermediate stops (0 for direct, 1 for one-stop)
    pub stops: u32,

    /// The flights of this itinerary, in travel order
    pub legs: Vec<LegDto>,
}

/// One flight of an itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date_time: String,
    pub arrival_date_time: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

impl From<&Leg> for LegDto {
    fn from(leg: &Leg) -> Self {
        Self {
            departure_airport: leg.departure_airport.to_string(),
            arrival_airport: leg.arrival_airport.to_string(),
            departure_date_time: format_datetime(leg.departure_time),
            arrival_date_time: format_datetime(leg.arrival_time),
        }
    }
}

impl From<&Itinerary> for ItineraryDto {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            stops: itinerary.stops(),
            legs: itinerary.legs().iter().map(LegDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Iata;
    use chrono::NaiveDate;

    fn dt(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn itinerary_serializes_in_wire_shape() {
        let itinerary = Itinerary::direct(Leg {
            departure_airport: Iata::parse("DUB").unwrap(),
            arrival_airport: Iata::parse("WRO").unwrap(),
            departure_time: dt(6, 30),
            arrival_time: dt(9, 50),
        });

        let json = serde_json::to_value(ItineraryDto::from(&itinerary)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stops": 0,
                "legs": [{
                    "departureAirport": "DUB",
                    "arrivalAirport": "WRO",
                    "departureDateTime": "2024-06-20T06:30",
                    "arrivalDateTime": "2024-06-20T09:50"
                }]
            })
        );
    }

    #[test]
    fn query_deserializes_camel_case() {
        let query: InterconnectionsQuery = serde_json::from_value(serde_json::json!({
            "departure": "DUB",
            "arrival": "WRO",
            "departureDateTime": "2024-06-20T07:00",
            "arrivalDateTime": "2024-06-21T21:00"
        }))
        .unwrap();

        assert_eq!(query.departure, "DUB");
        assert_eq!(query.arrival_date_time, "2024-06-21T21:00");
    }
}

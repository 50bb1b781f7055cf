//! Ryanair API response DTOs.
//!
//! These types map directly to the Ryanair JSON API responses. The route
//! catalogue carries more fields than the search needs; they are kept so
//! a catalogue row deserializes without surprises.

use serde::Deserialize;

use crate::domain::{Iata, InvalidIata, Route};

/// One row of the route catalogue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Departure airport IATA code.
    pub airport_from: String,

    /// Arrival airport IATA code.
    pub airport_to: String,

    /// Intermediate airport, set when this row describes a through
    /// service rather than a nonstop flight.
    pub connecting_airport: Option<String>,

    /// Whether the route was recently introduced.
    #[serde(default)]
    pub new_route: bool,

    /// Whether the route only runs part of the year.
    #[serde(default)]
    pub seasonal_route: bool,

    /// Operating airline identifier, e.g. "RYANAIR".
    pub operator: String,

    /// Operating carrier code, when reported.
    #[serde(default)]
    pub carrier_code: Option<String>,

    /// Route grouping label, e.g. "CITY".
    #[serde(default)]
    pub group: Option<String>,
}

impl RouteRecord {
    /// Convert a catalogue row into a domain route.
    ///
    /// Fails when any airport code in the row is not a valid IATA code;
    /// the caller drops such rows rather than failing the catalogue.
    pub fn to_route(&self) -> Result<Route, InvalidIata> {
        Ok(Route {
            origin: Iata::parse_normalized(&self.airport_from)?,
            destination: Iata::parse_normalized(&self.airport_to)?,
            operator: self.operator.clone(),
            connecting_airport: self
                .connecting_airport
                .as_deref()
                .map(Iata::parse_normalized)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalogue_row() {
        let json = r#"{
            "airportFrom": "DUB",
            "airportTo": "WRO",
            "connectingAirport": null,
            "newRoute": false,
            "seasonalRoute": false,
            "operator": "RYANAIR",
            "carrierCode": "FR",
            "group": "CITY"
        }"#;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.airport_from, "DUB");
        assert!(record.connecting_airport.is_none());

        let route = record.to_route().unwrap();
        assert_eq!(route.origin, Iata::parse("DUB").unwrap());
        assert_eq!(route.destination, Iata::parse("WRO").unwrap());
        assert!(route.is_eligible());
    }

    #[test]
    fn through_service_keeps_connecting_airport() {
        let json = r#"{
            "airportFrom": "DUB",
            "airportTo": "WRO",
            "connectingAirport": "STN",
            "operator": "RYANAIR"
        }"#;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        let route = record.to_route().unwrap();
        assert_eq!(route.connecting_airport, Some(Iata::parse("STN").unwrap()));
        assert!(!route.is_eligible());
    }

    #[test]
    fn malformed_airport_code_is_rejected() {
        let record = RouteRecord {
            airport_from: "DUBLIN".to_string(),
            airport_to: "WRO".to_string(),
            connecting_airport: None,
            new_route: false,
            seasonal_route: false,
            operator: "RYANAIR".to_string(),
            carrier_code: None,
            group: None,
        };

        assert!(record.to_route().is_err());
    }
}

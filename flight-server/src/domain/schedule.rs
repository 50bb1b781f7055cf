//! Monthly schedule data as served by the schedule API.
//!
//! Times are relative "HH:MM" strings and days are day-of-month numbers;
//! the absolute date context is the (year, month) the schedule was fetched
//! under. Anchoring entries to absolute timestamps happens in the search
//! layer, not here.

use serde::Deserialize;

/// One month of schedules for one city pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthSchedule {
    /// Month number as echoed by the API (1-12).
    pub month: u32,

    /// Per-day flight listings, in source order.
    pub days: Vec<DaySchedule>,
}

/// All scheduled flights on one day of the month.
#[derive(Debug, Clone, Deserialize)]
pub struct DaySchedule {
    /// Day of month (1-31).
    pub day: u32,

    /// Flights on this day, in source order.
    pub flights: Vec<ScheduleEntry>,
}

/// One scheduled flight within a month.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Operating carrier code (e.g. "FR").
    #[serde(default)]
    pub carrier_code: Option<String>,

    /// Flight number within the carrier.
    pub number: String,

    /// Local departure time of day, "HH:MM".
    pub departure_time: String,

    /// Local arrival time of day, "HH:MM".
    pub arrival_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape() {
        let json = r#"{
            "month": 6,
            "days": [
                {
                    "day": 20,
                    "flights": [
                        {
                            "carrierCode": "FR",
                            "number": "1926",
                            "departureTime": "07:45",
                            "arrivalTime": "09:05"
                        }
                    ]
                }
            ]
        }"#;

        let schedule: MonthSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.month, 6);
        assert_eq!(schedule.days.len(), 1);
        assert_eq!(schedule.days[0].day, 20);

        let flight = &schedule.days[0].flights[0];
        assert_eq!(flight.carrier_code.as_deref(), Some("FR"));
        assert_eq!(flight.number, "1926");
        assert_eq!(flight.departure_time, "07:45");
        assert_eq!(flight.arrival_time, "09:05");
    }

    #[test]
    fn carrier_code_is_optional() {
        let json = r#"{
            "month": 7,
            "days": [
                {
                    "day": 1,
                    "flights": [
                        { "number": "22", "departureTime": "06:00", "arrivalTime": "07:10" }
                    ]
                }
            ]
        }"#;

        let schedule: MonthSchedule = serde_json::from_str(json).unwrap();
        assert!(schedule.days[0].flights[0].carrier_code.is_none());
    }
}

//! Time-window filtering of monthly schedules.
//!
//! Converts relative per-day schedule entries into absolute timestamps and
//! keeps only flights strictly inside the requested window.

use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::{MonthSchedule, ResolvedFlight, YearMonth};

/// The requested `[departure, arrival]` window of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    /// Earliest acceptable departure.
    pub departure: NaiveDateTime,

    /// Latest acceptable arrival.
    pub arrival: NaiveDateTime,
}

impl SearchWindow {
    /// True iff both timestamps fall strictly inside the window.
    ///
    /// All four bounds are strict: a flight departing or arriving exactly
    /// at a window boundary is excluded.
    fn contains(&self, departure: NaiveDateTime, arrival: NaiveDateTime) -> bool {
        departure > self.departure
            && departure < self.arrival
            && arrival < self.arrival
            && arrival > self.departure
    }
}

/// Error returned for malformed schedule data.
///
/// A parse failure aborts the whole month's contribution; the caller
/// treats that month as empty and continues the search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schedule data for {month} day {day}: {reason} ({value:?})")]
pub struct ScheduleParseError {
    month: YearMonth,
    day: u32,
    value: String,
    reason: &'static str,
}

/// Anchor a month's schedule entries to absolute dates and keep those
/// strictly inside the window.
///
/// The date context is the queried `month`, not anything inside the
/// response body. Output preserves the source's (day, listing) order; no
/// additional sort is applied.
///
/// # Errors
///
/// Returns `ScheduleParseError` on a malformed "HH:MM" time or an invalid
/// day-of-month.
pub fn flights_within_window(
    schedule: &MonthSchedule,
    month: YearMonth,
    window: SearchWindow,
) -> Result<Vec<ResolvedFlight>, ScheduleParseError> {
    let mut selected = Vec::new();

    for day in &schedule.days {
        let date = month.day(day.day).ok_or(ScheduleParseError {
            month,
            day: day.day,
            value: day.day.to_string(),
            reason: "no such day in month",
        })?;

        for entry in &day.flights {
            let departure = date.and_time(parse_hhmm(&entry.departure_time, month, day.day)?);
            let arrival = date.and_time(parse_hhmm(&entry.arrival_time, month, day.day)?);

            if window.contains(departure, arrival) {
                selected.push(ResolvedFlight {
                    carrier_code: entry.carrier_code.clone(),
                    number: entry.number.clone(),
                    departure,
                    arrival,
                });
            }
        }
    }

    Ok(selected)
}

fn parse_hhmm(s: &str, month: YearMonth, day: u32) -> Result<NaiveTime, ScheduleParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ScheduleParseError {
        month,
        day,
        value: s.to_string(),
        reason: "expected HH:MM time",
    })
}

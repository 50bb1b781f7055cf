//! A schedule entry anchored to an absolute date.

use chrono::NaiveDateTime;

/// A concrete flight with absolute departure and arrival timestamps.
///
/// Produced by combining a [`ScheduleEntry`](super::ScheduleEntry) with the
/// calendar date it was fetched under. This is the unit passed between the
/// window-filtering and connection-matching stages. Timestamps are naive
/// local wall-clock values; no timezone conversion is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlight {
    /// Operating carrier code, when the schedule reported one.
    pub carrier_code: Option<String>,

    /// Flight number within the carrier.
    pub number: String,

    /// Absolute local departure timestamp.
    pub departure: NaiveDateTime,

    /// Absolute local arrival timestamp.
    pub arrival: NaiveDateTime,
}

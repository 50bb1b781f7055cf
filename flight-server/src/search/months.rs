//! Calendar-month expansion of a search window.
//!
//! Schedules are fetched one (year, month) at a time, so a request window
//! must first be expanded into the ordered set of months it touches.

use chrono::{Datelike, Duration, Months, NaiveDateTime};

use crate::domain::YearMonth;

use super::engine::SearchError;

/// Expand a `[departure, arrival]` window into the ordered, duplicate-free
/// months it touches.
///
/// The walk starts from the departure month and steps forward one month at
/// a time; the arrival month is always the final element. When the
/// departure falls on the first day of its month the start is treated as
/// one day earlier, so a month beginning exactly on the window's lower
/// bound is not skipped. The walk stops early once the next month's last
/// day would pass the arrival; this makes short windows straddling a month
/// boundary resolve to exactly the two adjacent months.
///
/// # Errors
///
/// Returns `SearchError::InvalidRange` when `departure >= arrival`.
pub fn months_spanning(
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
) -> Result<Vec<YearMonth>, SearchError> {
    if departure >= arrival {
        return Err(SearchError::InvalidRange { departure, arrival });
    }

    let departure_month = YearMonth::of(departure.date());
    let arrival_month = YearMonth::of(arrival.date());

    if departure_month == arrival_month {
        return Ok(vec![departure_month]);
    }

    let mut months = vec![departure_month];

    let mut cursor = departure;
    if cursor.day() == 1 {
        cursor -= Duration::days(1);
    }

    while cursor < arrival {
        let Some(next) = cursor.checked_add_months(Months::new(1)) else {
            break;
        };
        if end_of_month(next) > arrival {
            break;
        }
        cursor = start_of_month(next);
        push_month(&mut months, YearMonth::of(cursor.date()));
    }

    push_month(&mut months, arrival_month);
    Ok(months)
}

/// The last day of `dt`'s month, keeping the time of day.
fn end_of_month(dt: NaiveDateTime) -> NaiveDateTime {
    let last_day = YearMonth::of(dt.date()).succ().first_day() - Duration::days(1);
    last_day.and_time(dt.time())
}

/// The first day of `dt`'s month, keeping the time of day.
fn start_of_month(dt: NaiveDateTime) -> NaiveDateTime {
    // Safe: day 1 exists in every month
    dt.date().with_day(1).expect("day 1 always valid").and_time(dt.time())
}

/// Append a month unless it equals the last one pushed.
/// The walk is monotonic, so checking the tail suffices for dedup.
fn push_month(months: &mut Vec<YearMonth>, month: YearMonth) {
    if months.last() != Some(&month) {
        months.push(month);
    }
}

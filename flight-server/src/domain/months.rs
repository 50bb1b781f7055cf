//! Calendar month value type.

use std::fmt;

use chrono::NaiveDate;

/// Error returned when constructing a `YearMonth` with an invalid month.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("month must be 1-12, got {month}")]
pub struct InvalidMonth {
    month: u32,
}

/// A calendar (year, month) pair.
///
/// Ordered by year, then month; `succ` steps forward one month, crossing
/// year boundaries. The schedule API is queried one `YearMonth` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a new `YearMonth`, validating the month is 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        if !(1..=12).contains(&month) {
            return Err(InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The `YearMonth` a given date falls in.
    pub fn of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The next calendar month.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // Safe: month validated at construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid year-month")
    }

    /// The day-of-month for `day` within this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

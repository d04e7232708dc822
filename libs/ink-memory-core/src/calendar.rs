//! Calendar date helpers.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decides which calendar date an instant falls on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Calendar {
    /// The system time zone.
    #[default]
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl Calendar {
    /// Calendar at a fixed number of minutes east of UTC.
    ///
    /// Returns `None` when the offset is out of range (more than a day).
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::Fixed)
    }

    /// UTC calendar.
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// The calendar date of `instant`.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }

    /// The calendar date of `instant` as `YYYY-MM-DD`.
    pub fn date_string(&self, instant: DateTime<Utc>) -> String {
        format_date(self.date_of(instant))
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// The calendar day before `date`.
pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.pred_opt()
}

use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, civil::Date};

use crate::error::Error;
use crate::prelude::*;

/// The window a report covers, `[start, end)` in whole UTC days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    start: Date,
    end: Date,
    tag_key: String,
}

impl ReportRequest {
    /// `start = today - days`, `end = today`.
    pub fn trailing(today: Date, days: i64, tag_key: impl Into<String>) -> AppResult<Self> {
        let out_of_range = |_| Error::WindowOutOfRange { days };

        let span = Span::new().try_days(days).map_err(out_of_range)?;
        let start = today.checked_sub(span).map_err(out_of_range)?;

        Ok(ReportRequest {
            start,
            end: today,
            tag_key: tag_key.into(),
        })
    }

    /// YYYY-MM-DD, inclusive.
    pub fn start_date(&self) -> String {
        self.start.to_string()
    }

    /// YYYY-MM-DD, exclusive.
    pub fn end_date(&self) -> String {
        self.end.to_string()
    }

    pub fn tag_key(&self) -> &str {
        &self.tag_key
    }
}

/// The calendar date right now, in UTC. Billing days are UTC days.
pub fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

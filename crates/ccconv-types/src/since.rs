use crate::error::SinceError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Lower time bound selected with `--since`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Since {
    All,
    From(DateTime<Utc>),
}

impl Since {
    /// Resolve a `--since` value. Without one the bound is the start of `today` (UTC).
    pub fn parse(raw: Option<&str>, today: NaiveDate) -> Result<Self, SinceError> {
        match raw {
            None => Ok(Since::From(start_of_day(today))),
            Some("all") => Ok(Since::All),
            Some(value) => parse_timestamp(value.trim())
                .map(Since::From)
                .ok_or_else(|| SinceError::InvalidDate(value.to_string())),
        }
    }

    /// Whether an instant passes. Missing instants only pass `All`.
    pub fn includes(&self, at: Option<DateTime<Utc>>) -> bool {
        match (self, at) {
            (Since::All, _) => true,
            (Since::From(bound), Some(at)) => at >= *bound,
            (Since::From(_), None) => false,
        }
    }

    /// Whether a calendar day (taken at midnight UTC) passes.
    pub fn includes_date(&self, date: NaiveDate) -> bool {
        self.includes(Some(start_of_day(date)))
    }
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parse an RFC 3339 timestamp, an offset-less date-time (taken as UTC), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(start_of_day)
        })
}

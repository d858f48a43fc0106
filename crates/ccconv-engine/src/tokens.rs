use ccconv_types::{Record, UsageStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Usage summed over a set of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenTally {
    pub usage: UsageStats,
    pub records: usize,
}

impl TokenTally {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |tally, record| Self {
                usage: tally.usage + record.usage().unwrap_or_default(),
                records: tally.records + 1,
            })
    }

    /// Records stamped at or after `cutoff`; unstamped records are skipped
    pub fn since<'a>(records: impl IntoIterator<Item = &'a Record>, cutoff: DateTime<Utc>) -> Self {
        Self::from_records(
            records
                .into_iter()
                .filter(|record| record.timestamp().is_some_and(|at| at >= cutoff)),
        )
    }
}

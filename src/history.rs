//! The download history ledger.

use chrono::{DateTime, Utc};

use crate::models::HistoryEntry;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Completed downloads, newest first.
///
/// Entries are only ever inserted at the head, so the ledger stays sorted
/// by descending download date without any explicit ordering step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Returns a ledger with `entry` at index 0 followed by `self`.
    #[must_use]
    pub fn record(mut self, entry: HistoryEntry) -> Self {
        self.entries.insert(0, entry);
        self
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coarse distance between a past timestamp and now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

fn rounded_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

/// Buckets the age of `then` the way "… ago" labels are usually phrased.
/// Timestamps in the future count as "less than a minute".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTime {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = rounded_div(seconds, 60);

    match minutes {
        0 => RelativeTime::LessThanAMinute,
        m if m < 45 => RelativeTime::Minutes(m),
        m if m < 90 => RelativeTime::AboutHours(1),
        m if m < MINUTES_IN_DAY => RelativeTime::AboutHours(rounded_div(m, MINUTES_IN_HOUR)),
        m if m < 2520 => RelativeTime::Days(1),
        m if m < MINUTES_IN_MONTH => RelativeTime::Days(rounded_div(m, MINUTES_IN_DAY)),
        m if m < MINUTES_IN_TWO_MONTHS => {
            RelativeTime::AboutMonths(rounded_div(m, MINUTES_IN_MONTH))
        }
        m => {
            let months = m / MINUTES_IN_MONTH;
            if months < 12 {
                return RelativeTime::Months(rounded_div(m, MINUTES_IN_MONTH));
            }
            let years = months / 12;
            match months % 12 {
                r if r < 3 => RelativeTime::AboutYears(years),
                r if r < 9 => RelativeTime::OverYears(years),
                _ => RelativeTime::AlmostYears(years + 1),
            }
        }
    }
}

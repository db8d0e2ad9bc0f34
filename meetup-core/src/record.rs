//! The meetup entry persisted in each year's files.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MeetupError, MeetupResult};
use crate::time_of_day::TimeOfDay;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// One meetup, as stored in `MeetUps {year}.json`.
///
/// Field order matches the key order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub time: String,
    pub topic: String,
    pub presentation: String,
}

impl Record {
    pub fn new<S: AsRef<str>>(
        date: NaiveDate,
        time: TimeOfDay,
        topic: &str,
        presenters: &[S],
    ) -> Self {
        let presentation = presenters
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");

        Record {
            date: format_date(date),
            time: time.to_string(),
            topic: topic.to_string(),
            presentation,
        }
    }
}

/// Format a date as `March 06, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Parse a `yyyy-mm-dd` date given on the command line.
///
/// Only the zero-padded form is accepted: `2026-5-1` and `+2026-05-01` are
/// rejected even though chrono would read them.
pub fn parse_date(input: &str) -> MeetupResult<NaiveDate> {
    let invalid = || MeetupError::InvalidDate(input.to_string());

    if !DATE_PATTERN.is_match(input) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

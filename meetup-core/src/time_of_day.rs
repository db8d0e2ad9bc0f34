//! Meetup start times in 12-hour clock form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MeetupError, MeetupResult};

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})\s*(am|pm)$").expect("time pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A time of day as written on the meetup schedule, e.g. `06:30 PM`.
///
/// Only the shape of the input is checked, so `13:75pm` parses into an
/// hour of 13 and a minute of 75.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

/// Parse a time like `6:30pm`, `10:00AM` or `7:00 pm`.
pub fn parse_time(input: &str) -> MeetupResult<TimeOfDay> {
    let trimmed = input.trim();
    let invalid = || MeetupError::InvalidTimeFormat(trimmed.to_string());

    let caps = TIME_PATTERN.captures(trimmed).ok_or_else(invalid)?;

    let hour = caps[1].parse::<u8>().map_err(|_| invalid())?;
    let minute = caps[2].parse::<u8>().map_err(|_| invalid())?;
    let meridiem = if caps[3].eq_ignore_ascii_case("am") {
        Meridiem::Am
    } else {
        Meridiem::Pm
    };

    Ok(TimeOfDay {
        hour,
        minute,
        meridiem,
    })
}

impl FromStr for TimeOfDay {
    type Err = MeetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

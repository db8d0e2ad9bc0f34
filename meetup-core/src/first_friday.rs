//! First-Friday date resolution.
//!
//! Meetups happen on the first Friday of each month. When no date is given
//! on the command line, the next such Friday strictly after today is used.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::error::{MeetupError, MeetupResult};

/// Friday in Monday=0 .. Sunday=6 numbering
const FRIDAY: u32 = 4;

/// Return the first Friday of the given month.
///
/// Fails with `InvalidArgument` when `month` is outside 1..=12 or the year
/// can't be represented.
pub fn first_friday_of_month(year: i32, month: u32) -> MeetupResult<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        MeetupError::InvalidArgument(format!("no such month: {year}-{month:02}"))
    })?;

    let weekday = first.weekday().num_days_from_monday();
    let days_until_friday = (FRIDAY + 7 - weekday) % 7;

    first
        .checked_add_days(Days::new(u64::from(days_until_friday)))
        .ok_or_else(|| {
            MeetupError::InvalidArgument(format!("first Friday out of range: {year}-{month:02}"))
        })
}

/// Return the closest first-Friday-of-a-month strictly after `reference`.
///
/// If `reference` is itself a first Friday, the following month's is returned.
pub fn next_first_friday(reference: NaiveDate) -> MeetupResult<NaiveDate> {
    let this_month = first_friday_of_month(reference.year(), reference.month())?;
    if this_month > reference {
        debug!(%reference, resolved = %this_month, "first Friday later this month");
        return Ok(this_month);
    }

    let (year, month) = match reference.month() {
        12 => (reference.year() + 1, 1),
        m => (reference.year(), m + 1),
    };

    let resolved = first_friday_of_month(year, month)?;
    debug!(%reference, %resolved, "rolled over to next month's first Friday");
    Ok(resolved)
}

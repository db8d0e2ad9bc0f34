use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use meetup_core::error::MeetupResult;
use meetup_core::first_friday::next_first_friday;
use meetup_core::meetup_config::MeetupConfig;
use meetup_core::meetup_dir::MeetupDir;
use meetup_core::record::{Record, parse_date};
use meetup_core::time_of_day::parse_time;
use tracing::{debug, warn};

use crate::render::added_summary;

pub struct AddArgs {
    pub date: Option<String>,
    pub time: Option<String>,
    pub dir: Option<PathBuf>,
    pub topic: String,
    pub presenters: Vec<String>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    add(args, Local::now().date_naive(), MeetupDir::load, &mut stdout)
}

/// Validate the arguments, then prepend the entry to the year's files.
///
/// `load_dir` is only called once `--date` and `--time` have been checked,
/// and not at all when both `--dir` and `--time` are given.
fn add<F, W>(args: AddArgs, today: NaiveDate, load_dir: F, out: &mut W) -> Result<()>
where
    F: FnOnce() -> MeetupResult<MeetupDir>,
    W: Write,
{
    let meetup_date = resolve_date(args.date.as_deref(), today)?;
    let explicit_time = args.time.as_deref().map(parse_time).transpose()?;

    let meetup_dir = match (args.dir, explicit_time) {
        (Some(dir), Some(_)) => {
            MeetupDir::from_config(MeetupConfig::default()).with_meetups_dir(dir)
        }
        (dir, _) => {
            let loaded = load_dir().unwrap_or_else(|e| {
                warn!(error = %e, "could not load config, using defaults");
                MeetupDir::from_config(MeetupConfig::default())
            });
            match dir {
                Some(dir) => loaded.with_meetups_dir(dir),
                None => loaded,
            }
        }
    };

    let time = match explicit_time {
        Some(time) => time,
        None => meetup_dir.default_time()?,
    };

    if args.date.is_none() {
        writeln!(out, "No date specified. Using next first Friday: {}", meetup_date)?;
    }

    let record = Record::new(meetup_date, time, &args.topic, &args.presenters);
    let store = meetup_dir.year_store(meetup_date.year());
    debug!(dir = %store.dir().display(), "writing to year store");

    store.append(&record)?;

    writeln!(out, "{}", added_summary(&record, &store))?;

    Ok(())
}

/// The `--date` value, or the next first Friday after `today`.
fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(next_first_friday(today)?),
    }
}

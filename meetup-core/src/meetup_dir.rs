//! Meetups root directory management.

use std::path::PathBuf;

use tracing::debug;

use crate::error::MeetupResult;
use crate::meetup_config::MeetupConfig;
use crate::time_of_day::{TimeOfDay, parse_time};
use crate::year_store::YearStore;

#[derive(Clone)]
pub struct MeetupDir {
    config: MeetupConfig,
}

impl MeetupDir {
    /// Load the global config, writing a commented default file on first use.
    pub fn load() -> MeetupResult<Self> {
        let config_path = MeetupConfig::config_path()?;

        if !config_path.exists() {
            MeetupConfig::write_default(&config_path)?;
        }

        let config = MeetupConfig::load_from(&config_path)?;
        debug!(path = %config_path.display(), ?config, "loaded config");

        Ok(MeetupDir { config })
    }

    pub fn from_config(config: MeetupConfig) -> Self {
        MeetupDir { config }
    }

    /// Use `dir` as the meetups root instead of the configured one.
    pub fn with_meetups_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.meetups_dir = dir.into();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.meetups_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The configured fallback time, parsed.
    pub fn default_time(&self) -> MeetupResult<TimeOfDay> {
        parse_time(&self.config.default_time)
    }

    pub fn year_store(&self, year: i32) -> YearStore {
        YearStore::new(&self.data_path(), year)
    }
}

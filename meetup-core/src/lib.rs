//! Core types for the add-meetup tool.
//!
//! - `first_friday` resolves default meetup dates
//! - `time_of_day` normalizes loosely-typed times like `6:30pm`
//! - `record` builds the persisted meetup entry
//! - `store` and `year_store` prepend entries to the yearly JSON and Markdown files

pub mod error;
pub mod first_friday;
pub mod meetup_config;
pub mod meetup_dir;
pub mod record;
pub mod store;
pub mod time_of_day;
pub mod year_store;

pub use error::{MeetupError, MeetupResult};
pub use record::Record;
pub use time_of_day::{Meridiem, TimeOfDay};

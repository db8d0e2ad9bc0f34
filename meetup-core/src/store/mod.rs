//! Sinks that persist meetup records.
//!
//! Each year has two files holding the same entries newest-first: a JSON
//! array and a Markdown mirror. They are written by independent sinks that
//! consume the same `Record`; neither file is derived from the other, and a
//! failure in one sink leaves the other's write in place.

mod json;
mod text;

use std::path::Path;

use crate::error::MeetupResult;
use crate::record::Record;

pub use json::JsonSink;
pub use text::{TextSink, render_block};

/// A file-backed, newest-first sequence of records.
pub trait RecordSink {
    /// Insert `record` ahead of every existing entry and persist.
    fn prepend(&self, record: &Record) -> MeetupResult<()>;

    /// The file this sink writes to.
    fn path(&self) -> &Path;
}

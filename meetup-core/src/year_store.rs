//! Per-year storage: `MeetUps {year}/MeetUps {year}.{json,md}`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::MeetupResult;
use crate::record::Record;
use crate::store::{JsonSink, RecordSink, TextSink};

pub struct YearStore {
    year: i32,
    dir: PathBuf,
    json: JsonSink,
    text: TextSink,
}

impl YearStore {
    /// The store for `year` under the meetups root. Nothing is created
    /// until the first `append`.
    pub fn new(root: &Path, year: i32) -> Self {
        let name = format!("MeetUps {year}");
        let dir = root.join(&name);

        YearStore {
            year,
            json: JsonSink::new(dir.join(format!("{name}.json"))),
            text: TextSink::new(dir.join(format!("{name}.md"))),
            dir,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn json_path(&self) -> &Path {
        self.json.path()
    }

    pub fn text_path(&self) -> &Path {
        self.text.path()
    }

    /// Records currently in the JSON file, newest first.
    pub fn records(&self) -> MeetupResult<Vec<Record>> {
        self.json.load()
    }

    /// Prepend `record` to both files, creating the year directory if needed.
    ///
    /// The JSON file is written first. If the Markdown write then fails the
    /// JSON change stays on disk; there is no rollback.
    pub fn append(&self, record: &Record) -> MeetupResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let sinks: [&dyn RecordSink; 2] = [&self.json, &self.text];
        for sink in sinks {
            sink.prepend(record)?;
        }

        info!(year = self.year, topic = %record.topic, "added meetup entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_keyed_by_year() {
        let store = YearStore::new(Path::new("/data"), 2026);
        assert_eq!(store.year(), 2026);
        assert_eq!(store.dir(), Path::new("/data/MeetUps 2026"));
        assert_eq!(
            store.json_path(),
            Path::new("/data/MeetUps 2026/MeetUps 2026.json")
        );
        assert_eq!(
            store.text_path(),
            Path::new("/data/MeetUps 2026/MeetUps 2026.md")
        );
    }
}

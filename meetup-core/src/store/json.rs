use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::RecordSink;
use crate::error::{MeetupError, MeetupResult};
use crate::record::Record;

/// The structured `MeetUps {year}.json` file.
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSink { path: path.into() }
    }

    /// Read all records, newest first. A missing file is an empty list.
    pub fn load(&self) -> MeetupResult<Vec<Record>> {
        self.read()
    }

    /// Existing entries as raw JSON, so older entries are rewritten exactly
    /// as found, extra or missing keys included.
    fn load_entries(&self) -> MeetupResult<Vec<Value>> {
        self.read()
    }

    fn read<T: DeserializeOwned>(&self) -> MeetupResult<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            MeetupError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }
}

impl RecordSink for JsonSink {
    fn prepend(&self, record: &Record) -> MeetupResult<()> {
        let mut entries = self.load_entries()?;
        let entry =
            serde_json::to_value(record).map_err(|e| MeetupError::Serialization(e.to_string()))?;
        entries.insert(0, entry);

        let mut content = serde_json::to_string_pretty(&entries)
            .map_err(|e| MeetupError::Serialization(e.to_string()))?;
        content.push('\n');

        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = entries.len(), "wrote JSON records");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(topic: &str) -> Record {
        Record {
            date: "March 06, 2026".to_string(),
            time: "06:30 PM".to_string(),
            topic: topic.to_string(),
            presentation: "Alex Hart".to_string(),
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let sink = JsonSink::new(dir.path().join("missing.json"));
        assert!(sink.load().unwrap().is_empty());
    }

    #[test]
    fn prepend_writes_two_space_indent_and_newline() {
        let dir = TempDir::new().unwrap();
        let sink = JsonSink::new(dir.path().join("MeetUps 2026.json"));

        sink.prepend(&record("Rust")).unwrap();

        let content = std::fs::read_to_string(sink.path()).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"date\": \"March 06, 2026\",\n    \"time\": \"06:30 PM\",\n    \"topic\": \"Rust\",\n    \"presentation\": \"Alex Hart\"\n  }\n]\n"
        );
    }

    #[test]
    fn prepend_puts_newest_first() {
        let dir = TempDir::new().unwrap();
        let sink = JsonSink::new(dir.path().join("MeetUps 2026.json"));

        sink.prepend(&record("first")).unwrap();
        sink.prepend(&record("second")).unwrap();

        let topics: Vec<_> = sink.load().unwrap().into_iter().map(|r| r.topic).collect();
        assert_eq!(topics, vec!["second", "first"]);
    }

    #[test]
    fn prepend_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MeetUps 2026.json");
        std::fs::write(&path, "not json").unwrap();

        let sink = JsonSink::new(&path);
        assert!(matches!(
            sink.prepend(&record("Rust")),
            Err(MeetupError::Serialization(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn prepend_keeps_extra_keys_of_older_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MeetUps 2026.json");
        std::fs::write(
            &path,
            r#"[{"date": "January 02, 2026", "time": "06:30 PM", "topic": "Old", "presentation": "Someone", "location": "Venn"}]"#,
        )
        .unwrap();

        let sink = JsonSink::new(&path);
        sink.prepend(&record("Rust")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["topic"], "Rust");
        assert_eq!(entries[1]["location"], "Venn");
        assert!(content.contains(
            "\"presentation\": \"Someone\",\n    \"location\": \"Venn\"\n"
        ));
    }

    #[test]
    fn prepend_accepts_older_entries_with_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("MeetUps 2026.json");
        std::fs::write(
            &path,
            r#"[{"date": "January 02, 2026", "time": "06:30 PM", "topic": "Old"}]"#,
        )
        .unwrap();

        let sink = JsonSink::new(&path);
        sink.prepend(&record("Rust")).unwrap();

        let entries: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["presentation"], "Alex Hart");
        assert_eq!(entries[1]["topic"], "Old");
        assert!(entries[1].get("presentation").is_none());
    }
}

use std::path::{Path, PathBuf};

use tracing::debug;

use super::RecordSink;
use crate::error::MeetupResult;
use crate::record::Record;

/// The human-readable `MeetUps {year}.md` mirror.
pub struct TextSink {
    path: PathBuf,
}

impl TextSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextSink { path: path.into() }
    }
}

/// Render a record as its four-line block, ending in a newline.
pub fn render_block(record: &Record) -> String {
    format!(
        "Date: {}\nTime: {}\nTopic: {}\nPresentation: {}\n",
        record.date, record.time, record.topic, record.presentation
    )
}

impl RecordSink for TextSink {
    fn prepend(&self, record: &Record) -> MeetupResult<()> {
        let block = render_block(record);

        let content = if self.path.exists() {
            let existing = std::fs::read_to_string(&self.path)?;
            format!("{block}\n{existing}")
        } else {
            block
        };

        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "wrote Markdown block");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

//! Terminal rendering for meetup entries.
//!
//! Extension traits that add colored output to meetup-core types using owo_colors.

use meetup_core::record::Record;
use meetup_core::year_store::YearStore;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Record {
    fn render(&self) -> String {
        [
            format!("  Date:         {}", self.date),
            format!("  Time:         {}", self.time),
            format!("  Topic:        {}", self.topic),
            format!("  Presentation: {}", self.presentation),
        ]
        .join("\n")
    }
}

impl Render for YearStore {
    fn render(&self) -> String {
        format!(
            "  JSON: {}\n  MD:   {}",
            self.json_path().display().dimmed(),
            self.text_path().display().dimmed()
        )
    }
}

/// Summary printed after a successful append.
pub fn added_summary(record: &Record, store: &YearStore) -> String {
    format!(
        "{}\n{}\n{}",
        "Added meetup entry:".green(),
        record.render(),
        store.render()
    )
}

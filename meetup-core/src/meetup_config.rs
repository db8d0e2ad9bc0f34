//! Global add-meetup configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MeetupError, MeetupResult};

const DEFAULT_MEETUPS_PATH: &str = ".";
const DEFAULT_TIME: &str = "6:30pm";

/// Written on first run; every key is commented out so the defaults apply.
pub const DEFAULT_CONFIG_FILE: &str = r#"# add-meetup configuration

# Folder holding the "MeetUps <year>" directories:
# meetups_dir = "."

# Used when --time is not given:
# default_time = "6:30pm"
"#;

fn default_meetups_path() -> PathBuf {
    PathBuf::from(DEFAULT_MEETUPS_PATH)
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

/// Configuration at ~/.config/meetups/config.toml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MeetupConfig {
    /// Directory holding the `MeetUps {year}` folders
    #[serde(default = "default_meetups_path")]
    pub meetups_dir: PathBuf,

    /// Time used when `--time` is not given
    #[serde(default = "default_time")]
    pub default_time: String,
}

impl Default for MeetupConfig {
    fn default() -> Self {
        MeetupConfig {
            meetups_dir: default_meetups_path(),
            default_time: default_time(),
        }
    }
}

impl MeetupConfig {
    pub fn config_path() -> MeetupResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MeetupError::Config("Could not determine config directory".into()))?
            .join("meetups");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> MeetupResult<Self> {
        config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .build()
            .map_err(|e| MeetupError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| MeetupError::Config(e.to_string()))
    }

    /// Write `DEFAULT_CONFIG_FILE` to `path`, creating parent directories.
    pub fn write_default(path: &Path) -> MeetupResult<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG_FILE)
        };

        write().map_err(|e| {
            MeetupError::Config(format!("Could not write {}: {e}", path.display()))
        })
    }
}

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOKEN_WINDOW_HOURS: u32 = 4;

/// Settings read from `<data-dir>/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one subdirectory per project
    pub log_root: Option<String>,
    /// Look-back window for the `tokens` command
    pub token_window_hours: Option<u32>,
}

impl Config {
    /// Load config from a specific path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn token_window_hours(&self) -> u32 {
        self.token_window_hours.unwrap_or(DEFAULT_TOKEN_WINDOW_HOURS)
    }
}

// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PuzzleError, Result};
use crate::fs::FileSystem;

/// Deserialize TOML config text and validate it.
pub fn parse_and_validate(contents: &str) -> Result<ConfigFile> {
    let raw: RawConfigFile = toml::from_str(contents)?;
    ConfigFile::try_from(raw)
}

/// Load the config through `fs`, falling back to defaults when the file is
/// missing and was not asked for explicitly.
pub fn load_or_default(fs: &dyn FileSystem, path: &Path, explicit: bool) -> Result<ConfigFile> {
    if !fs.is_file(path) {
        if explicit {
            return Err(PuzzleError::ConfigError(format!(
                "config file {path:?} not found"
            )));
        }
        warn!(?path, "no config file; using defaults");
        return Ok(ConfigFile::default());
    }

    let contents = fs.read_to_string(path)?;
    parse_and_validate(&contents)
}

/// Default config location: `Advent.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Advent.toml")
}

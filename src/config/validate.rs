// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{ConfigFile, DayConfig, RawConfigFile};
use crate::errors::{PuzzleError, Result};
use crate::types::Day;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PuzzleError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_global_config(&raw)?;
        let days = validate_days(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, days))
    }
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.inputs_dir.as_os_str().is_empty() {
        return Err(PuzzleError::ConfigError(
            "[config].inputs_dir must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_days(cfg: &RawConfigFile) -> Result<BTreeMap<Day, DayConfig>> {
    let mut days = BTreeMap::new();

    for (key, day_cfg) in cfg.day.iter() {
        let day: Day = key
            .parse()
            .map_err(|e| PuzzleError::ConfigError(format!("[day.{key}]: {e}")))?;

        if let Some(input) = &day_cfg.input {
            if input.as_os_str().is_empty() {
                return Err(PuzzleError::ConfigError(format!(
                    "[day.{key}].input must not be empty"
                )));
            }
        }

        if days.insert(day, day_cfg.clone()).is_some() {
            return Err(PuzzleError::ConfigError(format!(
                "{day} is configured more than once (key '{key}')"
            )));
        }
    }

    Ok(days)
}

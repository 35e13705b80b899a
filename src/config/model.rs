// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::types::Day;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// inputs_dir = "inputs"
/// cross_check = true
///
/// [day.2]
/// input = "inputs/reports.txt"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// Per-day overrides from `[day.<N>]`, keyed by the raw day key.
    #[serde(default)]
    pub day: BTreeMap<String, DayConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Directory holding `day<N>.txt` inputs, relative to the config file.
    #[serde(default = "default_inputs_dir")]
    pub inputs_dir: PathBuf,

    /// Compare the single-pass report validator with the brute-force one on
    /// every report and fail on disagreement.
    #[serde(default = "default_cross_check")]
    pub cross_check: bool,
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from("inputs")
}

fn default_cross_check() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            inputs_dir: default_inputs_dir(),
            cross_check: default_cross_check(),
        }
    }
}

/// `[day.<N>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayConfig {
    /// Input file for this day, relative to the config file.
    pub input: Option<PathBuf>,
}

/// Validated configuration. Built via `ConfigFile::try_from(RawConfigFile)`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub day: BTreeMap<Day, DayConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, day: BTreeMap<Day, DayConfig>) -> Self {
        Self { config, day }
    }

    /// Input path for `day`, relative to the config file: the explicit
    /// `[day.N].input` if set, else `<inputs_dir>/day<N>.txt`.
    pub fn input_for(&self, day: Day) -> PathBuf {
        self.day
            .get(&day)
            .and_then(|d| d.input.clone())
            .unwrap_or_else(|| self.config.inputs_dir.join(day.default_input_name()))
    }
}

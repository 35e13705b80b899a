// src/config/mod.rs

//! Configuration loading and validation for advent.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate day keys and paths (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_or_default, parse_and_validate};
pub use model::{ConfigFile, ConfigSection, DayConfig, RawConfigFile};

// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Unsatisfiable constraints: {0}")]
    UnsatisfiableConstraints(String),

    #[error("Validator strategies disagree on report {0:?}")]
    StrategyMismatch(Vec<i64>),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PuzzleError {
    /// Build a [`PuzzleError::ParseError`] for a 1-based input line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::ParseError {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{Day, Part};

/// Command-line arguments for `advent`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "advent",
    version,
    about = "Solve daily puzzles: bounded reports, page ordering, hiking trails.",
    long_about = None
)]
pub struct CliArgs {
    /// Day to solve (2, 5 or 10).
    #[arg(value_name = "DAY")]
    pub day: Day,

    /// Answer only this part (1 or 2). Both parts are printed by default.
    #[arg(long, value_name = "PART")]
    pub part: Option<Part>,

    /// Input file. Overrides `[day.N].input` from the config.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Advent.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ADVENT_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate the input and print a summary, without solving.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip comparing the day 2 validator against the brute-force reference.
    #[arg(long)]
    pub no_cross_check: bool,
}

impl CliArgs {
    /// Arguments for `day` with every option at its default.
    pub fn for_day(day: Day) -> Self {
        Self {
            day,
            part: None,
            input: None,
            config: None,
            log_level: None,
            dry_run: false,
            no_cross_check: false,
        }
    }

    /// Parts to answer, in output order.
    pub fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(part) => vec![part],
            None => Part::BOTH.to_vec(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod ordering;
pub mod puzzle;
pub mod reports;
pub mod trails;
pub mod types;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, default_config_path, load_or_default};
use crate::fs::{FileSystem, RealFileSystem};
use crate::puzzle::{Outcome, SolveOptions, solve};

/// High-level entry point used by `main.rs`: real file system, stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &RealFileSystem, &mut out)
}

/// Run one day against an arbitrary file system and output sink.
///
/// This wires together:
/// - config loading (optional file, defaults otherwise)
/// - input path resolution and a single full read of the input
/// - parsing + solving the requested parts
/// - printing one integer per answer (or the dry-run summary)
pub fn run_with(args: &CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let (config_path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (default_config_path(), false),
    };
    let cfg = load_or_default(fs, &config_path, explicit)?;

    let input_path = resolve_input_path(args, &cfg, &config_path);
    info!(day = %args.day, input = ?input_path, "reading puzzle input");

    let input = fs
        .read_to_string(&input_path)
        .with_context(|| format!("loading input for {}", args.day))?;

    let options = SolveOptions {
        parts: args.parts(),
        cross_check: cfg.config.cross_check && !args.no_cross_check,
        dry_run: args.dry_run,
    };
    debug!(?options, "solve options");

    match solve(args.day, &input, &options)? {
        Outcome::Summary(summary) => writeln!(out, "{summary}")?,
        Outcome::Answers(answers) => {
            for (_part, answer) in answers {
                writeln!(out, "{answer}")?;
            }
        }
    }

    Ok(())
}

/// `--input` wins; otherwise the configured path, relative to the config file.
fn resolve_input_path(args: &CliArgs, cfg: &ConfigFile, config_path: &Path) -> PathBuf {
    match &args.input {
        Some(path) => path.clone(),
        None => config_root_dir(config_path).join(cfg.input_for(args.day)),
    }
}

/// Directory that relative config paths are resolved against.
///
/// - If the config path has a non-empty parent (e.g. "puzzles/Advent.toml"),
///   we use that directory.
/// - If it's a bare filename like "Advent.toml", paths stay relative to the
///   current working directory.
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::new(),
    }
}

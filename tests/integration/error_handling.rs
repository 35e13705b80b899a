// tests/integration/error_handling.rs

use std::io::Write;
use std::path::PathBuf;

use advent::cli::CliArgs;
use advent::config::load_or_default;
use advent::errors::PuzzleError;
use advent::fs::RealFileSystem;
use advent::types::Day;
use tempfile::{NamedTempFile, tempdir};

use crate::common::{demo_path, run_to_string};

#[test]
fn test_unknown_day_in_config_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[day.3]
input = "inputs/day3.txt"
"#
    )
    .unwrap();

    match load_or_default(&RealFileSystem, file.path(), true) {
        Err(PuzzleError::ConfigError(msg)) => {
            assert!(msg.contains("[day.3]"));
            assert!(msg.contains("unsupported day"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[config]\ncross_check = \"sometimes\"\n").unwrap();

    match load_or_default(&RealFileSystem, file.path(), true) {
        Err(PuzzleError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_config_file_explicit_vs_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Advent.toml");

    assert!(matches!(
        load_or_default(&RealFileSystem, &path, true),
        Err(PuzzleError::ConfigError(_))
    ));

    let cfg = load_or_default(&RealFileSystem, &path, false).unwrap();
    assert!(cfg.config.cross_check);
    assert!(cfg.day.is_empty());
}

#[test]
fn test_demo_config_loads_through_real_filesystem() {
    let cfg = load_or_default(&RealFileSystem, &demo_path("Advent.toml"), true).unwrap();
    assert_eq!(
        cfg.input_for(Day::PrintQueue),
        PathBuf::from("inputs/print_queue.txt")
    );
}

#[test]
fn test_cyclic_rules_are_fatal() {
    let mut args = CliArgs::for_day(Day::PrintQueue);
    args.config = Some(demo_path("Advent.toml"));
    args.input = Some(demo_path("inputs/cyclic_rules.txt"));

    let err = run_to_string(&args, &RealFileSystem).unwrap_err();
    match err.downcast_ref::<PuzzleError>() {
        Some(PuzzleError::UnsatisfiableConstraints(msg)) => {
            assert!(msg.contains("cycle detected"));
        }
        other => panic!("Expected UnsatisfiableConstraints, got: {:?}", other),
    }
}

#[test]
fn test_missing_input_file_is_reported_with_context() {
    let mut args = CliArgs::for_day(Day::Reports);
    args.config = Some(demo_path("Advent.toml"));
    args.input = Some(demo_path("inputs/nope.txt"));

    let err = run_to_string(&args, &RealFileSystem).unwrap_err();
    assert!(format!("{err:#}").contains("loading input for day 2"));
}

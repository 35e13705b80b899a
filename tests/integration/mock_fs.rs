// tests/integration/mock_fs.rs

use std::path::PathBuf;

use advent::cli::CliArgs;
use advent::errors::PuzzleError;
use advent::fs::mock::MockFileSystem;
use advent::types::{Day, Part};
use advent_test_utils::builders::{ConfigFileBuilder, PrintQueueInputBuilder, height_map_text};

use crate::common::{init_tracing, run_to_string};

#[test]
fn default_config_is_optional() -> anyhow::Result<()> {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("inputs/day2.txt", "1 2 3\n3 2 9\n");

    let out = run_to_string(&CliArgs::for_day(Day::Reports), &fs)?;
    assert_eq!(out, "1\n2\n");
    Ok(())
}

#[test]
fn explicit_missing_config_fails() {
    let fs = MockFileSystem::new();
    fs.add_file("inputs/day2.txt", "1 2 3\n");

    let mut args = CliArgs::for_day(Day::Reports);
    args.config = Some(PathBuf::from("other.toml"));

    let err = run_to_string(&args, &fs).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PuzzleError>(),
        Some(PuzzleError::ConfigError(_))
    ));
}

#[test]
fn config_paths_resolve_against_config_dir() -> anyhow::Result<()> {
    init_tracing();
    let cfg = ConfigFileBuilder::new()
        .with_inputs_dir("data")
        .with_day_input("5", "queue/day5.txt");

    let input = PrintQueueInputBuilder::new()
        .total_order(&[10, 20, 30, 40])
        .update(&[10, 20, 30])
        .update(&[40, 30, 20])
        .build();

    let fs = MockFileSystem::new();
    fs.add_file("puzzles/Advent.toml", cfg.to_toml());
    fs.add_file("puzzles/queue/day5.txt", input);
    fs.add_file(
        "puzzles/data/day10.txt",
        height_map_text(&[
            vec![Some(0), Some(1), Some(2), Some(3), Some(4)],
            vec![None, None, None, None, Some(5)],
            vec![None, Some(9), Some(8), Some(7), Some(6)],
        ]),
    );

    let mut args = CliArgs::for_day(Day::PrintQueue);
    args.config = Some(PathBuf::from("puzzles/Advent.toml"));
    // valid: middle 20; corrected [20, 30, 40]: middle 30
    assert_eq!(run_to_string(&args, &fs)?, "20\n30\n");

    args.day = Day::Trails;
    args.part = Some(Part::Two);
    assert_eq!(run_to_string(&args, &fs)?, "1\n");
    Ok(())
}

#[test]
fn cross_check_flag_and_config_both_disable_it() -> anyhow::Result<()> {
    let cfg = ConfigFileBuilder::new().with_cross_check(false);
    assert!(!cfg.build().config.cross_check);

    let fs = MockFileSystem::new();
    fs.add_file("inputs/day2.txt", "7 6 4 2 1\n1 3 2 4 5\n");

    let mut args = CliArgs::for_day(Day::Reports);
    args.no_cross_check = true;
    assert_eq!(run_to_string(&args, &fs)?, "1\n2\n");
    Ok(())
}

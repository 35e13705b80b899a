pub use advent_test_utils::{demo_path, init_tracing};

use advent::cli::CliArgs;
use advent::fs::FileSystem;

/// Run the CLI flow and return what it printed.
#[allow(dead_code)]
pub fn run_to_string(args: &CliArgs, fs: &dyn FileSystem) -> anyhow::Result<String> {
    let mut out = Vec::new();
    advent::run_with(args, fs, &mut out)?;
    Ok(String::from_utf8(out)?)
}

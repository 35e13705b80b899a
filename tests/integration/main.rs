#[path = "../common/mod.rs"]
mod common;

mod error_handling;
mod mock_fs;

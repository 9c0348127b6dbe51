//! # StockChat CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, etc.).
//! Each `.rs` file in `cli/tests/` (other than this module) is compiled as a
//! separate test crate that drives the compiled `stockchat` binary.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get StockChat Command (`stockchat_cmd`)
///
/// Creates an `assert_cmd::Command` for the `stockchat` binary built for the
/// current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn stockchat_cmd() -> Command {
    Command::cargo_bin("stockchat").expect("Failed to find stockchat binary for testing")
}

/// # Isolated Command (`isolated_cmd`)
///
/// Like `stockchat_cmd`, but runs inside `dir` with the user configuration
/// directory redirected there too, so neither the developer's own
/// configuration nor a stray `.stockchat.toml` leaks into the test.
/// A `.git` directory is created in `dir` to stop the project config search.
pub fn isolated_cmd(dir: &Path) -> Command {
    std::fs::create_dir_all(dir.join(".git")).expect("Failed to create .git marker");
    let mut cmd = stockchat_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

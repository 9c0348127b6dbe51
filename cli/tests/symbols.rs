//! # StockChat CLI Symbols Integration Tests
//!
//! File: cli/tests/symbols.rs
//! Author: Christi Mahu
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_symbols_lists_all_known_tickers() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(dir.path())
        .arg("symbols")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Symbol")
                .and(predicate::str::contains("AAPL"))
                .and(predicate::str::contains("TSLA"))
                .and(predicate::str::contains("MSFT"))
                .and(predicate::str::contains("GOOGL"))
                .and(predicate::str::contains("Alphabet Inc."))
                .and(predicate::str::contains("4 symbol(s).")),
        );
}

//! # StockChat Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities used by several commands, kept apart from the
//! command-specific logic (`commands::`), the chat core (`chat::`) and the
//! core infrastructure (`core::`).
//!
//! - **`ui`**: terminal rendering of chat entries and plain-text tables.
//!

/// Terminal user interface helpers (message rendering, tables).
pub mod ui;

//! # StockChat UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal presentation helpers shared by the commands:
//!
//! - **`render`**: `TerminalRenderer`, the `MessageSink` that prints chat
//!   entries with role labels (and optional timestamps).
//! - **`table`**: aligned plain-text tables, used by `stockchat symbols` and
//!   the `/symbols` chat command.
//!

pub mod render;
pub mod table;

pub use render::{RenderStyle, TerminalRenderer};
pub use table::format_table;

use crate::chat::StockTable;

/// The symbol table as printed by `stockchat symbols` and `/symbols`.
pub fn format_symbol_table(table: &StockTable) -> String {
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|(symbol, record)| {
            vec![
                symbol.to_string(),
                record.company.to_string(),
                format!("${:.2}", record.price),
                record.outlook.to_string(),
            ]
        })
        .collect();
    format_table(&["Symbol", "Company", "Price", "Outlook"], &rows)
}

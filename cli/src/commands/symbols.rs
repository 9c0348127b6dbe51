//! # StockChat Symbols Command
//!
//! File: cli/src/commands/symbols.rs
//! Author: Christi Mahu
//!
//! Implements `stockchat symbols`, which prints the ticker symbols the
//! assistant knows about.
//!
use crate::chat::StockTable;
use crate::common::ui::format_symbol_table;
use crate::core::error::Result;
use clap::Parser;

/// `stockchat symbols` takes no arguments.
#[derive(Parser, Debug)]
pub struct SymbolsArgs {}

pub async fn handle_symbols(_args: SymbolsArgs) -> Result<()> {
    let table = StockTable::builtin();
    print!("{}", format_symbol_table(&table));
    println!("\n{} symbol(s). Try 'stockchat ask What about AAPL?'", table.len());
    Ok(())
}

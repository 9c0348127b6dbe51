//! # StockChat Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the StockChat CLI. Each
//! command defines its own `clap` arguments struct and an async handler that
//! `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `chat`: Interactive terminal chat
//! - `ask`: One-shot question, prints the reply
//! - `symbols`: Lists the known ticker symbols
//! - `srv`: Serves the browser chat widget locally
//!

/// Interactive terminal chat surface.
pub mod chat;
/// One-shot question and answer.
pub mod ask;
/// Prints the symbol table.
pub mod symbols;
/// Local HTTP server for the browser widget. Includes configuration, routes and server logic.
pub mod srv;

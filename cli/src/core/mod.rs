//! # StockChat Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Rendering of the browser widget page
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{StockchatError, Result}; // For error handling
//! use crate::core::templating; // For rendering the widget page
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;

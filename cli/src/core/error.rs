//! # StockChat Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the StockChat application.
//! The chat core itself never fails: replies are total and blank input is simply
//! ignored. Errors only arise in the surrounding shell, namely configuration
//! loading, pattern compilation, widget template rendering, terminal I/O and
//! socket binding.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `StockchatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.chat.user_label.trim().is_empty() {
//!     return Err(StockchatError::Config("chat.user_label must not be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the StockChat application.
#[derive(Error, Debug)]
pub enum StockchatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message text must not be blank.")]
    EmptyInput,

    #[error("Invalid message pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

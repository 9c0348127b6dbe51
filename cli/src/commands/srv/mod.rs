//! # StockChat Widget Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `stockchat srv` serves the browser chat widget locally: a single page with
//! a text field, a send button and a scrolling list of message bubbles, backed
//! by a small JSON API around the responder.
//!
//! ## Architecture
//!
//! - `config.rs`: Command-line arguments and their merge with the loaded configuration
//! - `routes.rs`: Axum handlers for the page and the JSON API
//! - `server_logic.rs`: Page rendering, middleware, port selection, graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:8000)
//! stockchat srv
//!
//! # Different port, no CORS headers, snappier replies
//! stockchat srv --port 9000 --no-cors --delay-ms 200
//! ```
//!
use crate::core::config as app_config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Handles argument merging for the widget server.
pub mod config;

/// HTTP handlers for the widget page and its JSON API.
pub mod routes;

/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Loads the application configuration, merges the command-line arguments
/// over it and runs the server until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);
    let cfg = app_config::load_config()?;
    let server_config = config::resolve(&args, &cfg)?;
    info!("Effective server config: {:?}", server_config);
    server_logic::run_server(server_config).await
}

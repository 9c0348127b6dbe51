//! # StockChat Widget Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the Axum server for `stockchat srv`:
//! 1. Render the widget page once from the embedded template
//! 2. Build the router with tracing and (optionally) CORS middleware
//! 3. Find an available port if the requested one is in use
//! 4. Serve until Ctrl+C or SIGTERM, then shut down gracefully
//!
use super::config::ServerConfig;
use super::routes::{self, AppState};
use crate::chat::Responder;
use crate::core::error::{Result, StockchatError};
use crate::core::templating::{self, WidgetContext};
use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Builds the application and serves it until a shutdown signal arrives.
///
/// ## Errors
///
/// Fails if the widget page cannot be rendered, no port is free within
/// `MAX_PORT_ATTEMPTS` tries, or the listener cannot be bound.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let app = create_app(&config)?;
    let listener = bind_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    println!("\n=================================================================");
    println!("📈 {} is running", config.title);
    println!("🌐 Local URL:         http://{}", addr);
    println!("⏱️  Reply delay:       {} ms", config.reply_delay_ms);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");
    println!("Server starting! Press Ctrl+C to stop.");
    info!("Starting widget server on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Create Axum Application (`create_app`)
///
/// Renders the widget page and wraps the routes in tracing and CORS layers.
fn create_app(config: &ServerConfig) -> Result<Router> {
    let page = templating::render_widget_page(&WidgetContext {
        title: config.title.clone(),
        reply_delay_ms: config.reply_delay_ms,
    })?;
    let state = AppState {
        responder: Arc::new(Responder::new()?),
        page: Arc::from(page),
    };

    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(routes::router(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(cors_layer),
    ))
}

/// # Bind Available Port (`bind_available_port`)
///
/// Binds `start_port`, or the first free port after it, trying at most
/// `max_attempts` ports. The listener is returned bound, so the port cannot
/// be taken between probing and serving.
async fn bind_available_port(
    host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    let mut current_port = start_port;
    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(port) => port,
                    None => break,
                };
            }
        }
    }

    Err(StockchatError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host, start_port, max_attempts
    ))
    .into())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! # StockChat Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! StockChat is a toy stock assistant. It answers with canned overviews for
//! a handful of hardcoded ticker symbols, either in the terminal or through a
//! small browser widget served locally. Nothing is fetched from the network
//! and nothing is persisted. This is not a source of financial information.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! stockchat chat
//! stockchat ask "What is the outlook for AAPL?"
//! stockchat symbols
//! stockchat -v srv --port 9000
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Responder, chat surface, transcript, deferred queue
mod commands; // Command handlers (chat, ask, symbols, srv)
mod common; // Shared terminal UI helpers
mod core; // Core infrastructure (errors, config, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "stockchat",
    about = "📈 StockChat: a toy stock assistant chat",
    long_about = "Chat with a toy assistant that gives canned overviews for a few ticker symbols.\n\
                  Runs in the terminal or as a local browser widget. Not investment advice.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat interactively in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Ask a single question and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the known ticker symbols.
    Symbols(commands::symbols::SymbolsArgs),
    /// Serve the browser chat widget locally.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Symbols(args) => commands::symbols::handle_symbols(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

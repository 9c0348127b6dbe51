//! # StockChat Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Implements `stockchat ask <TEXT>...`: a one-shot chat surface. The words
//! are joined with single spaces, submitted with no reply delay, and the
//! assistant reply is printed on its own. Blank text prints nothing.
//!
//! ```bash
//! stockchat ask What is the outlook for TSLA?
//! ```
//!
use crate::chat::{ChatSurface, Responder, Role, Transcript};
use crate::core::error::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., value_name = "TEXT")]
    pub text: Vec<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let input = args.text.join(" ");
    for reply in ask(&input).await? {
        println!("{}", reply);
    }
    Ok(())
}

/// Runs `input` through a zero-delay surface and returns the assistant replies.
async fn ask(input: &str) -> Result<Vec<String>> {
    let mut surface = ChatSurface::new(Responder::new()?, Transcript::new(), Duration::ZERO);
    if !surface.submit(input) {
        warn!("Nothing to ask: the message is blank.");
    }
    surface.settle().await;
    Ok(surface
        .into_sink()
        .messages()
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .map(|m| m.text.clone())
        .collect())
}

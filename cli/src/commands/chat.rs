//! # StockChat Terminal Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `stockchat chat`, the interactive terminal chat surface.
//!
//! - Enter submits the current entry. A line ending in a backslash (`\`)
//!   asks for a line break instead, and the entry continues on the next line.
//! - Each submission shows up immediately. The assistant reply follows after
//!   the configured delay (600 ms by default), and the loop waits for it
//!   before reading more input, so pairs never interleave on screen.
//! - `/help`, `/symbols`, `/quit` and `/exit` are handled locally. End of
//!   input also ends the session.
//!
//! When standard input is not a terminal (e.g. piped), no prompt is printed
//! and user entries are echoed so the output reads as a full transcript.
//!
//! ## Examples
//!
//! ```bash
//! stockchat chat
//! stockchat chat --delay-ms 0 --timestamps
//! printf 'hi\nAAPL?\n' | stockchat chat
//! ```
//!
use crate::chat::{ChatSurface, Responder};
use crate::common::ui::{format_symbol_table, RenderStyle, TerminalRenderer};
use crate::core::config::{self, ChatConfig};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Milliseconds to wait before each assistant reply (overrides `chat.reply_delay_ms`).
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Prefix each entry with its HH:MM:SS timestamp.
    #[arg(long)]
    pub timestamps: bool,
}

const HELP_TEXT: &str = "\
Ask about a stock by its ticker symbol, e.g. \"What is the outlook for AAPL?\"
Press Enter to send. End a line with \\ to continue on the next line.
Commands:
  /symbols  list the known ticker symbols
  /help     show this help
  /quit     leave the chat (also /exit)";

/// A line of terminal input, once interpreted.
#[derive(Debug, PartialEq, Eq)]
enum LineAction {
    /// The entry continues on the next line.
    Continue,
    /// A complete entry to hand to the chat surface.
    Submit(String),
    Help,
    Symbols,
    Quit,
    UnknownCommand(String),
}

/// Accumulates continuation lines until an entry is complete.
#[derive(Debug, Default)]
struct EntryBuffer {
    lines: Vec<String>,
}

impl EntryBuffer {
    fn push_line(&mut self, line: &str) -> LineAction {
        if self.lines.is_empty() {
            if let Some(command) = line.trim().strip_prefix('/') {
                return match command.to_ascii_lowercase().as_str() {
                    "help" | "?" => LineAction::Help,
                    "symbols" => LineAction::Symbols,
                    "quit" | "exit" => LineAction::Quit,
                    other => LineAction::UnknownCommand(other.to_string()),
                };
            }
        }
        match line.strip_suffix('\\') {
            Some(head) => {
                self.lines.push(head.to_string());
                LineAction::Continue
            }
            None => {
                self.lines.push(line.to_string());
                LineAction::Submit(std::mem::take(&mut self.lines).join("\n"))
            }
        }
    }

    /// Whatever is left when input ends mid-entry.
    fn take_rest(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.lines).join("\n"))
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, applies command-line overrides and runs the chat
/// loop on standard input/output until the user quits or input ends.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let cfg = config::load_config()?;
    let chat_cfg = apply_overrides(cfg.chat, &args)?;

    let interactive = io::stdin().is_terminal();
    let style = RenderStyle {
        user_label: chat_cfg.user_label.clone(),
        assistant_label: chat_cfg.assistant_label.clone(),
        show_timestamps: chat_cfg.show_timestamps,
    };
    let mut renderer = TerminalRenderer::new(io::stdout(), style);
    if interactive {
        renderer = renderer.without_user_echo();
    }

    let mut surface = ChatSurface::new(Responder::new()?, renderer, chat_cfg.reply_delay());
    let prompt = interactive.then(|| format!("{}: ", chat_cfg.user_label));
    let reader = BufReader::new(tokio::io::stdin());
    run_chat(reader, &mut surface, prompt.as_deref()).await
}

fn apply_overrides(mut chat: ChatConfig, args: &ChatArgs) -> Result<ChatConfig> {
    if let Some(delay_ms) = args.delay_ms {
        chat.reply_delay_ms = delay_ms;
    }
    if args.timestamps {
        chat.show_timestamps = true;
    }
    config::validate_config(&config::Config {
        chat: chat.clone(),
        ..Default::default()
    })?;
    Ok(chat)
}

/// Drives one chat session. Generic over the input so tests can feed bytes.
async fn run_chat<R, W>(
    reader: R,
    surface: &mut ChatSurface<TerminalRenderer<W>>,
    prompt: Option<&str>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let symbols: Vec<&str> = surface.responder().table().iter().map(|(s, _)| s).collect();
    say(
        surface,
        &format!(
            "Chat with the Stock Assistant! Ask about {}. Type /help for commands, /quit to leave.",
            symbols.join(", ")
        ),
    )?;

    let mut buffer = EntryBuffer::default();
    let mut lines = reader.lines();
    loop {
        if let Some(prompt) = prompt {
            let out = surface.sink_mut().get_mut();
            write!(out, "{}", prompt).context("Failed to write prompt")?;
            out.flush().context("Failed to flush stdout")?;
        }

        let line = match lines.next_line().await.context("Failed to read input")? {
            Some(line) => line,
            None => {
                debug!("End of input");
                if let Some(rest) = buffer.take_rest() {
                    submit_and_wait(surface, &rest).await?;
                }
                break;
            }
        };

        match buffer.push_line(&line) {
            LineAction::Continue => {}
            LineAction::Submit(entry) => submit_and_wait(surface, &entry).await?,
            LineAction::Help => say(surface, HELP_TEXT)?,
            LineAction::Symbols => {
                let table = format_symbol_table(surface.responder().table());
                say(surface, table.trim_end())?
            }
            LineAction::Quit => break,
            LineAction::UnknownCommand(name) => say(
                surface,
                &format!("Unknown command '/{}'. Type /help for the list of commands.", name),
            )?,
        }
    }

    if surface.has_pending() {
        debug!("Delivering {} pending replies before exit", surface.pending_replies());
    }
    surface.settle().await;
    say(surface, "Goodbye!")
}

async fn submit_and_wait<W: Write>(
    surface: &mut ChatSurface<TerminalRenderer<W>>,
    entry: &str,
) -> Result<()> {
    if surface.submit(entry) {
        surface.settle().await;
    }
    match surface.sink_mut().take_error() {
        Some(e) => Err(e).context("Failed to write chat output"),
        None => Ok(()),
    }
}

/// Prints a local (non-transcript) line.
fn say<W: Write>(surface: &mut ChatSurface<TerminalRenderer<W>>, text: &str) -> Result<()> {
    let out = surface.sink_mut().get_mut();
    writeln!(out, "{}", text).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

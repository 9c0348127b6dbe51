//! # StockChat Responder
//!
//! File: cli/src/chat/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Maps raw user text to a reply. The mapping is pure: it only reads the
//! static symbol table, and `respond` never fails.
//!
//! Rules, in priority order:
//! 1. The *first* word-bounded token of 2–5 uppercase letters is taken as the
//!    candidate symbol. If the table knows it, the reply is a canned overview.
//! 2. Otherwise, if the text contains "hello", "hi" or "hey" as a whole word
//!    (any case), the reply is a fixed greeting.
//! 3. Otherwise the reply is a fixed fallback asking for a ticker.
//!
//! Word boundaries are ASCII-only: a non-ASCII letter such as `é` right next
//! to a token still separates it, so `"éAAPL"` finds AAPL.
//!
//! An unknown but well-formed ticker such as `ZZZZ` does not produce a
//! "not found" reply. It falls through to rules 2 and 3, and only the first
//! candidate token is ever considered, so `"OK, AAPL?"` never reaches AAPL.
//!
//! ## Examples
//!
//! ```rust
//! let responder = Responder::new()?;
//! let reply = responder.respond("Tell me about AAPL");
//! assert!(reply.contains("Apple Inc."));
//! ```
//!
use super::stocks::{StockRecord, StockTable};
use crate::core::error::{Result, StockchatError};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

const SYMBOL_PATTERN: &str = r"(?-u:\b)([A-Z]{2,5})(?-u:\b)";
const GREETING_PATTERN: &str = r"(?i)(?-u:\b)(?:hello|hi|hey)(?-u:\b)";

pub const GREETING_REPLY: &str =
    "Hello! Ask me about a stock by its ticker symbol (e.g. AAPL or TSLA) and I’ll share a brief overview.";

pub const FALLBACK_REPLY: &str =
    "I’m not sure how to help with that. Please ask about a stock by its ticker symbol (e.g. “What is the outlook for AAPL?”).";

/// Which rule produced a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "symbol")]
pub enum ReplyKind {
    Quote(String),
    Greeting,
    Fallback,
}

/// Reply generator over a symbol table.
#[derive(Debug, Clone)]
pub struct Responder {
    table: StockTable,
    symbol_re: Regex,
    greeting_re: Regex,
}

impl Responder {
    /// Builds a responder over the built-in table.
    ///
    /// Pattern compilation is the only fallible step; `respond` itself is total.
    pub fn new() -> Result<Self> {
        Self::with_table(StockTable::builtin())
    }

    pub fn with_table(table: StockTable) -> Result<Self> {
        let symbol_re = Regex::new(SYMBOL_PATTERN).map_err(StockchatError::from)?;
        let greeting_re = Regex::new(GREETING_PATTERN).map_err(StockchatError::from)?;
        Ok(Self {
            table,
            symbol_re,
            greeting_re,
        })
    }

    pub fn table(&self) -> &StockTable {
        &self.table
    }

    /// First candidate ticker in `input`, known or not.
    pub fn extract_symbol<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.symbol_re
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_greeting(&self, input: &str) -> bool {
        self.greeting_re.is_match(input)
    }

    pub fn lookup(&self, symbol: &str) -> Option<&'static StockRecord> {
        self.table.lookup(symbol)
    }

    pub fn classify(&self, input: &str) -> ReplyKind {
        if let Some(symbol) = self.extract_symbol(input) {
            if self.lookup(symbol).is_some() {
                return ReplyKind::Quote(symbol.to_string());
            }
            debug!("Candidate symbol '{}' is not in the table", symbol);
        }
        if self.is_greeting(input) {
            ReplyKind::Greeting
        } else {
            ReplyKind::Fallback
        }
    }

    /// # Respond (`respond`)
    ///
    /// Produces the reply for `input`. Never fails and never panics.
    pub fn respond(&self, input: &str) -> String {
        self.respond_with_kind(input).0
    }

    /// Like `respond`, also reporting which rule fired.
    pub fn respond_with_kind(&self, input: &str) -> (String, ReplyKind) {
        let kind = self.classify(input);
        let reply = match &kind {
            ReplyKind::Quote(symbol) => match self.lookup(symbol) {
                Some(record) => format_quote(symbol, record),
                None => FALLBACK_REPLY.to_string(),
            },
            ReplyKind::Greeting => GREETING_REPLY.to_string(),
            ReplyKind::Fallback => FALLBACK_REPLY.to_string(),
        };
        debug!("Classified input as {:?}", kind);
        (reply, kind)
    }
}

fn format_quote(symbol: &str, record: &StockRecord) -> String {
    format!(
        "Here’s a quick overview for {} ({}): the latest price is ${:.2} per share and the general outlook is {}. Remember, this is only a basic summary and not investment advice.",
        symbol, record.company, record.price, record.outlook
    )
}

//! # StockChat Chat Core (`chat`)
//!
//! File: cli/src/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The front-end independent heart of StockChat:
//!
//! - **`stocks`**: the fixed symbol table (`StockRecord`, `StockTable`).
//! - **`responder`**: the pure text-in/text-out reply logic.
//! - **`message`**: `Message`, `Role`, the `MessageSink` rendering seam and the
//!   append-only `Transcript`.
//! - **`queue`**: the single-threaded `DeferredQueue` of delayed tasks.
//! - **`surface`**: `ChatSurface`, which ties the pieces together: immediate
//!   user entries, deferred assistant replies.
//!
//! The terminal (`commands::chat`, `commands::ask`) and browser
//! (`commands::srv`) front-ends only feed input in and render what comes out.
//!

pub mod message;
pub mod queue;
pub mod responder;
pub mod stocks;
pub mod surface;

pub use message::{Message, MessageSink, Role, Transcript};
pub use responder::{ReplyKind, Responder};
pub use stocks::StockTable;
pub use surface::ChatSurface;

//! # StockChat Messages and Transcript
//!
//! File: cli/src/chat/message.rs
//! Author: Christi Mahu
//!
//! Defines the chat `Message`, its `Role`, the `MessageSink` rendering
//! seam consumed by the chat surface, and the in-memory append-only
//! `Transcript` that implements it.
//!
use chrono::{DateTime, Local};
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Styling class used by the renderers.
    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn avatar(self) -> &'static str {
        match self {
            Role::User => "user-avatar.png",
            Role::Assistant => "assistant-avatar.png",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub role: Role,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Role::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Role::Assistant)
    }
}

/// Rendering sink the chat surface appends to.
pub trait MessageSink {
    fn append_message(&mut self, message: Message);
}

/// Ordered, append-only list of messages.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl MessageSink for Transcript {
    fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn append_message(&mut self, message: Message) {
        (**self).append_message(message);
    }
}

//! # StockChat Terminal Renderer
//!
//! File: cli/src/common/ui/render.rs
//! Author: Christi Mahu
//!
//! A `MessageSink` that prints each entry as a labelled block. Continuation
//! lines of multi-line messages are indented under the label so entries stay
//! visually separate.
//!
use crate::chat::{Message, MessageSink, Role};
use std::io::{self, Write};
use tracing::warn;

/// Labels and options for terminal output.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub user_label: String,
    pub assistant_label: String,
    pub show_timestamps: bool,
}

impl RenderStyle {
    fn label(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user_label,
            Role::Assistant => &self.assistant_label,
        }
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    style: RenderStyle,
    /// Print user entries too. An interactive user already sees their own typing.
    echo_user: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, style: RenderStyle) -> Self {
        Self {
            out,
            style,
            echo_user: true,
            error: None,
        }
    }

    /// Skip printing user entries.
    pub fn without_user_echo(mut self) -> Self {
        self.echo_user = false;
        self
    }

    /// First write error seen since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Direct access to the output, for lines that are not chat entries.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    fn write_message(&mut self, message: &Message) -> io::Result<()> {
        let mut prefix = String::new();
        if self.style.show_timestamps {
            prefix.push_str(&format!("[{}] ", message.sent_at.format("%H:%M:%S")));
        }
        prefix.push_str(self.style.label(message.role));
        prefix.push_str(": ");

        let indent = " ".repeat(prefix.chars().count());
        let mut lines = message.text.lines();
        writeln!(self.out, "{}{}", prefix, lines.next().unwrap_or(""))?;
        for line in lines {
            writeln!(self.out, "{}{}", indent, line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> MessageSink for TerminalRenderer<W> {
    fn append_message(&mut self, message: Message) {
        if message.role == Role::User && !self.echo_user {
            return;
        }
        if let Err(e) = self.write_message(&message) {
            warn!("Failed to render {} message: {}", message.role, e);
            self.error.get_or_insert(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> RenderStyle {
        RenderStyle {
            user_label: "You".into(),
            assistant_label: "Assistant".into(),
            show_timestamps: false,
        }
    }

    fn rendered(mut renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(std::mem::take(renderer.get_mut())).unwrap()
    }

    #[test]
    fn test_renders_labelled_entries() {
        let mut renderer = TerminalRenderer::new(Vec::new(), style());
        renderer.append_message(Message::user("hi"));
        renderer.append_message(Message::assistant("Hello!"));
        assert_eq!(rendered(renderer), "You: hi\nAssistant: Hello!\n");
    }

    #[test]
    fn test_multiline_text_is_indented() {
        let mut renderer = TerminalRenderer::new(Vec::new(), style());
        renderer.append_message(Message::user("first\nsecond"));
        assert_eq!(rendered(renderer), "You: first\n     second\n");
    }

    #[test]
    fn test_user_echo_can_be_disabled() {
        let mut renderer = TerminalRenderer::new(Vec::new(), style()).without_user_echo();
        renderer.append_message(Message::user("hi"));
        renderer.append_message(Message::assistant("Hello!"));
        assert_eq!(rendered(renderer), "Assistant: Hello!\n");
    }

    #[test]
    fn test_timestamps_prefix() {
        let mut renderer = TerminalRenderer::new(
            Vec::new(),
            RenderStyle {
                show_timestamps: true,
                ..style()
            },
        );
        renderer.append_message(Message::assistant("ok"));
        let out = rendered(renderer);
        assert!(out.starts_with('['));
        assert!(out.ends_with("] Assistant: ok\n"));
    }

    #[test]
    fn test_write_errors_are_kept() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut renderer = TerminalRenderer::new(Broken, style());
        renderer.append_message(Message::assistant("lost"));
        let err = renderer.take_error().expect("error recorded");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(renderer.take_error().is_none());
    }
}

//! # StockChat Chat Surface
//!
//! File: cli/src/chat/surface.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The chat surface turns submissions into transcript entries. A submission
//! appends the trimmed user text to the rendering sink right away and queues
//! a deferred reply. Once the reply delay has elapsed, the responder runs on
//! the captured text and the reply is appended as an assistant entry.
//!
//! ## Behavior
//!
//! - Blank or whitespace-only input is ignored: nothing is appended and
//!   nothing is scheduled.
//! - Every submission gets its own deferred reply bound to its own text.
//!   Replies are never cancelled or merged.
//! - A reply is always appended after its own user entry, and replies come
//!   out in submission order.
//!
//! ## Examples
//!
//! ```rust
//! let mut surface = ChatSurface::new(Responder::new()?, Transcript::new(), Duration::from_millis(600));
//! surface.submit("hey there");
//! surface.settle().await; // waits out the delay, appends the reply
//! ```
//!
use super::message::{Message, MessageSink};
use super::queue::DeferredQueue;
use super::responder::Responder;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Reply waiting for its delay to elapse.
struct PendingReply {
    input: String,
}

pub struct ChatSurface<S: MessageSink> {
    responder: Responder,
    sink: S,
    reply_delay: Duration,
    pending: DeferredQueue<PendingReply>,
}

impl<S: MessageSink> ChatSurface<S> {
    pub fn new(responder: Responder, sink: S, reply_delay: Duration) -> Self {
        Self {
            responder,
            sink,
            reply_delay,
            pending: DeferredQueue::new(),
        }
    }

    /// # Submit (`submit`)
    ///
    /// Submits raw input at the current instant. Returns `false` when the
    /// input was blank and therefore ignored.
    pub fn submit(&mut self, input: &str) -> bool {
        self.submit_at(input, Instant::now())
    }

    /// Submits raw input as if it arrived at `now`.
    pub fn submit_at(&mut self, input: &str, now: Instant) -> bool {
        let text = input.trim();
        if text.is_empty() {
            debug!("Ignoring blank submission");
            return false;
        }
        self.sink.append_message(Message::user(text));
        self.pending.schedule_at(
            now + self.reply_delay,
            PendingReply {
                input: text.to_string(),
            },
        );
        debug!(
            "Queued reply in {:?} ({} pending)",
            self.reply_delay,
            self.pending.len()
        );
        true
    }

    /// Appends every reply due at `now`. Returns how many were delivered.
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while let Some(pending) = self.pending.pop_due(now) {
            let reply = self.responder.respond(&pending.input);
            self.sink.append_message(Message::assistant(reply));
            delivered += 1;
        }
        if delivered > 0 {
            debug!("Delivered {} deferred replies", delivered);
        }
        delivered
    }

    /// # Settle (`settle`)
    ///
    /// Sleeps until each pending reply is due and delivers it, returning once
    /// the queue is empty.
    pub async fn settle(&mut self) {
        while let Some(due) = self.pending.next_due() {
            tokio::time::sleep_until(due).await;
            self.deliver_due(Instant::now());
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::{Role, Transcript};
    use crate::chat::responder::GREETING_REPLY;

    const DELAY: Duration = Duration::from_millis(600);

    fn surface() -> ChatSurface<Transcript> {
        ChatSurface::new(Responder::new().unwrap(), Transcript::new(), DELAY)
    }

    fn entries(surface: &mut ChatSurface<Transcript>) -> Vec<(Role, String)> {
        surface
            .sink_mut()
            .messages()
            .iter()
            .map(|m| (m.role, m.text.clone()))
            .collect()
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut s = surface();
        assert!(!s.submit(""));
        assert!(!s.submit("   "));
        assert!(!s.submit("\t\n"));
        assert!(s.sink_mut().messages().is_empty());
        assert!(!s.has_pending());
        assert_eq!(s.pending_replies(), 0);
    }

    #[test]
    fn test_user_entry_is_immediate_and_trimmed() {
        let start = Instant::now();
        let mut s = surface();
        assert!(s.submit_at("  hey there  ", start));

        assert_eq!(entries(&mut s), [(Role::User, "hey there".to_string())]);
        assert_eq!(s.pending_replies(), 1);
    }

    #[test]
    fn test_reply_waits_for_delay() {
        let start = Instant::now();
        let mut s = surface();
        s.submit_at("hey there", start);

        assert_eq!(s.deliver_due(start + DELAY - Duration::from_millis(1)), 0);
        assert_eq!(s.sink_mut().messages().len(), 1);

        assert_eq!(s.deliver_due(start + DELAY), 1);
        assert_eq!(
            entries(&mut s),
            [
                (Role::User, "hey there".to_string()),
                (Role::Assistant, GREETING_REPLY.to_string()),
            ]
        );
    }

    #[test]
    fn test_two_submissions_spaced_out_interleave_pairs() {
        let start = Instant::now();
        let mut s = surface();

        s.submit_at("Tell me about AAPL", start);
        s.deliver_due(start + DELAY);
        let second = start + DELAY + Duration::from_millis(50);
        s.submit_at("and MSFT?", second);
        s.deliver_due(second + DELAY);

        let roles: Vec<Role> = entries(&mut s).into_iter().map(|(r, _)| r).collect();
        assert_eq!(roles, [Role::User, Role::Assistant, Role::User, Role::Assistant]);
        let msgs = s.sink_mut().messages();
        assert!(msgs[1].text.contains("Apple Inc."));
        assert!(msgs[3].text.contains("Microsoft Corporation"));
    }

    #[test]
    fn test_rapid_submissions_keep_each_reply_after_its_pair() {
        let start = Instant::now();
        let mut s = surface();

        s.submit_at("AAPL", start);
        s.submit_at("TSLA", start + Duration::from_millis(10));
        assert_eq!(s.pending_replies(), 2);

        // Only the first reply is due.
        assert_eq!(s.deliver_due(start + DELAY), 1);
        assert_eq!(s.deliver_due(start + DELAY + Duration::from_millis(10)), 1);

        let got = entries(&mut s);
        assert_eq!(got[0], (Role::User, "AAPL".to_string()));
        assert_eq!(got[1], (Role::User, "TSLA".to_string()));
        assert_eq!(got[2].0, Role::Assistant);
        assert!(got[2].1.contains("Apple Inc."));
        assert_eq!(got[3].0, Role::Assistant);
        assert!(got[3].1.contains("Tesla, Inc."));
    }

    #[test]
    fn test_zero_delay_delivers_immediately() {
        let now = Instant::now();
        let mut s = ChatSurface::new(Responder::new().unwrap(), Transcript::new(), Duration::ZERO);
        s.submit_at("hi", now);
        assert_eq!(s.deliver_due(now), 1);
        assert_eq!(s.sink_mut().messages()[1].text, GREETING_REPLY);
    }

    #[tokio::test]
    async fn test_settle_delivers_all_pending() {
        let mut s = ChatSurface::new(
            Responder::new().unwrap(),
            Transcript::new(),
            Duration::from_millis(5),
        );
        s.submit("hello");
        s.submit("GOOGL");
        s.settle().await;

        assert_eq!(s.pending_replies(), 0);
        let transcript = s.into_sink();
        assert_eq!(transcript.messages().len(), 4);
        assert_eq!(transcript.messages()[2].text, GREETING_REPLY);
        assert!(transcript.messages()[3].text.contains("Alphabet Inc."));
    }
}

//! Boundary between the command engine and the chat platform.
//!
//! The engine consumes [`InboundEvent`]s from an [`EventFeed`] and hands its
//! replies to a [`ReplySink`]. Both traits are implemented for Slack in the
//! [`crate::slack`] module and mocked in tests.

use std::fmt;

use mockall::automock;

/// Identifier of the bot on the chat platform.
///
/// Resolved once at startup and never changed afterwards. It is only used to
/// recognise messages that mention the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity(String);

impl BotIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        BotIdentity(user_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a platform event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A chat message
    Message,
    /// Anything else, with the platform's type name
    Other(String),
}

impl From<&str> for EventKind {
    fn from(kind: &str) -> Self {
        match kind {
            "message" => EventKind::Message,
            other => EventKind::Other(other.to_owned()),
        }
    }
}

/// An event delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Event kind
    pub kind: EventKind,
    /// Whether the platform tagged the event with a subtype
    /// (edit, join, bot message...)
    pub has_subtype: bool,
    /// Message text, empty when the event has none
    pub text: String,
    /// Channel the event happened in
    pub channel: String,
}

impl InboundEvent {
    /// Builds a plain user message, the only kind of event that may carry a command.
    pub fn message(channel: &str, text: &str) -> Self {
        InboundEvent {
            kind: EventKind::Message,
            has_subtype: false,
            text: text.to_owned(),
            channel: channel.to_owned(),
        }
    }

    /// Whether the event may carry a bot command.
    pub fn is_user_message(&self) -> bool {
        self.kind == EventKind::Message && !self.has_subtype
    }
}

/// Source of inbound events.
#[automock]
pub trait EventFeed {
    /// Returns the events received since the previous poll, oldest first.
    ///
    /// Failures are handled by the implementation; a failed poll yields no events.
    async fn poll(&mut self) -> Vec<InboundEvent>;
}

/// Destination of the bot replies.
#[automock]
pub trait ReplySink {
    /// Posts `text` to `channel`. The caller does not retry on error.
    async fn send(&self, channel: &str, text: &str) -> Result<(), anyhow::Error>;
}

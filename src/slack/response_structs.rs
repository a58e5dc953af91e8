//! Response structures for Slack Web API methods.
//!
//! Slack answers every method with HTTP 200 and reports failures through the
//! `ok` and `error` fields of the body.

use serde::Deserialize;
use std::fmt;

use crate::events::{EventKind, InboundEvent};

/// Response of `auth.test`.
#[derive(Deserialize, Debug)]
pub struct AuthTestResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// User id of the token owner, the bot itself
    pub user_id: Option<String>,
    /// Error code when `ok` is false
    pub error: Option<String>,
}

impl fmt::Display for AuthTestResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ok={}, user_id={:?}, error={:?}",
            self.ok, self.user_id, self.error
        )
    }
}

/// Response of `conversations.history`.
#[derive(Deserialize, Debug)]
pub struct HistoryResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Messages, newest first
    #[serde(default)]
    pub messages: Vec<MessageResponse>,
    /// Whether older messages in the requested range were left out
    #[serde(default)]
    pub has_more: bool,
    /// Error code when `ok` is false
    pub error: Option<String>,
}

/// A message from `conversations.history`.
#[derive(Deserialize, Debug, Clone)]
pub struct MessageResponse {
    /// Event type, `message` for chat messages
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype of special messages (`bot_message`, `channel_join`...)
    pub subtype: Option<String>,
    /// Message text
    pub text: Option<String>,
    /// Timestamp, unique per channel
    pub ts: String,
}

impl MessageResponse {
    /// Converts the message into an event of `channel`.
    pub fn into_event(self, channel: &str) -> InboundEvent {
        InboundEvent {
            kind: EventKind::from(self.event_type.as_str()),
            has_subtype: self.subtype.is_some(),
            text: self.text.unwrap_or_default(),
            channel: channel.to_owned(),
        }
    }
}

impl fmt::Display for MessageResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "type={}, subtype={:?}, ts={}",
            self.event_type, self.subtype, self.ts
        )
    }
}

/// Response of `chat.postMessage`.
#[derive(Deserialize, Debug)]
pub struct PostMessageResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Timestamp of the posted message
    pub ts: Option<String>,
    /// Error code when `ok` is false
    pub error: Option<String>,
}

//! Message synchronization with Slack channels.
//!
//! This module provides the [`SlackSync`] struct, the [`EventFeed`] of the bot.
//! It polls `conversations.history` of every watched channel and keeps a
//! cursor per channel so each message is delivered once.

use std::collections::HashMap;

use futures::future::join_all;
use log::{debug, error, info, warn};

use crate::{
    events::{EventFeed, InboundEvent},
    slack::{SlackError, requester::Requester, response_structs::MessageResponse},
};

/// Maximum number of messages fetched per history request.
pub const HISTORY_LIMIT: u32 = 100;

/// Maximum number of history requests per channel and poll.
pub const MAX_PAGES: u32 = 10;

/// Cursor of a channel primed while empty. Every message is newer.
const EMPTY_CHANNEL_CURSOR: &str = "0";

/// Polls Slack channels for new messages.
///
/// The first successful request on a channel only records its newest message,
/// so history posted before the bot started is never replayed. Later polls
/// return the messages posted after the cursor, oldest first.
pub struct SlackSync<R: Requester> {
    /// Slack requester to interact with the Web API
    requester: R,
    /// Watched channel ids
    channels: Vec<String>,
    /// Timestamp of the newest message seen, per primed channel
    cursors: HashMap<String, String>,
}

impl<R: Requester> SlackSync<R> {
    /// Create a new [SlackSync].
    ///
    /// # Arguments
    ///
    /// * `requester` - An implementation of the [Requester] trait to interact with Slack.
    /// * `channels` - Ids of the channels to watch.
    pub fn new(requester: R, channels: Vec<String>) -> Self {
        SlackSync {
            requester,
            channels,
            cursors: HashMap::new(),
        }
    }

    /// Fetches the messages of a channel posted after its cursor, newest first.
    ///
    /// When more than [`HISTORY_LIMIT`] messages were posted since the last
    /// poll, older pages are requested until the cursor is reached, up to
    /// [`MAX_PAGES`] pages.
    ///
    /// Errors are logged and yield `None`, leaving the cursor untouched so the
    /// messages are fetched again on the next poll.
    async fn request_channel(&self, channel: &str) -> Option<Vec<MessageResponse>> {
        let Some(cursor) = self.cursors.get(channel) else {
            // An unprimed channel only needs its newest message
            let (messages, _) = self.request_page(channel, None, None, 1).await?;
            return Some(messages);
        };

        let mut messages = Vec::new();
        let mut latest = None;
        for _ in 0..MAX_PAGES {
            let (page, has_more) = self
                .request_page(channel, Some(cursor.clone()), latest.take(), HISTORY_LIMIT)
                .await?;

            // Pages go backwards in time, the last message is the oldest one
            let oldest = page.last().map(|message| message.ts.clone());
            messages.extend(page);

            match oldest {
                Some(ts) if has_more => latest = Some(ts),
                _ => return Some(messages),
            }
        }

        warn!(
            "more than {} messages in {} since the last poll, older ones are skipped",
            MAX_PAGES * HISTORY_LIMIT,
            channel
        );
        Some(messages)
    }

    /// Requests one page of history and returns its messages and whether
    /// older messages remain.
    async fn request_page(
        &self,
        channel: &str,
        oldest: Option<String>,
        latest: Option<String>,
        limit: u32,
    ) -> Option<(Vec<MessageResponse>, bool)> {
        let result = self
            .requester
            .get_history(channel, oldest, latest, limit)
            .await
            .map_err(SlackError::from)
            .and_then(|history| {
                if history.ok {
                    Ok((history.messages, history.has_more))
                } else {
                    Err(SlackError::api("conversations.history", history.error))
                }
            });

        match result {
            Ok(page) => Some(page),
            Err(err) => {
                error!("error while requesting history of {}: {}", channel, err);
                None
            }
        }
    }
}

impl<R: Requester> EventFeed for SlackSync<R> {
    async fn poll(&mut self) -> Vec<InboundEvent> {
        let results = join_all(
            self.channels
                .iter()
                .map(|channel| self.request_channel(channel)),
        )
        .await;

        let mut events = Vec::new();
        for (channel, messages) in self.channels.iter().zip(results) {
            let Some(messages) = messages else {
                continue;
            };

            let primed = self.cursors.contains_key(channel);
            // Slack returns the newest message first
            match messages.first() {
                Some(newest) => {
                    self.cursors.insert(channel.clone(), newest.ts.clone());
                }
                None if !primed => {
                    self.cursors
                        .insert(channel.clone(), EMPTY_CHANNEL_CURSOR.to_owned());
                }
                None => {}
            }

            if !primed {
                info!("start listening to {}", channel);
                continue;
            }

            debug!("{} new messages in {}", messages.len(), channel);
            events.extend(
                messages
                    .into_iter()
                    .rev()
                    .map(|message| message.into_event(channel)),
            );
        }

        events
    }
}

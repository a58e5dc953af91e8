//! Bot module wiring the command engine to Slack.
//!
//! This module provides the main [`Bot`] implementation. It polls an
//! [`EventFeed`] on a fixed interval, runs every event through the
//! [`Dispatcher`] and posts the replies to a [`ReplySink`].
//!
//! # Processing Flow
//!
//! ```text
//! EventFeed::poll → Dispatcher::dispatch → ReplySink::send
//! ```
//!
//! Events are handled one at a time, in the order the feed returns them, so
//! two commands can never update the FOODCON status concurrently.

use std::time::Duration;

use log::{debug, error, info};
use tokio::time;

use crate::{
    config::Config,
    dispatcher::Dispatcher,
    events::{EventFeed, ReplySink},
    slack::{SlackRequester, SlackSender, SlackSync, resolve_identity},
};

/// Main bot structure polling Slack and answering FOODCON commands.
pub struct Bot<F: EventFeed, S: ReplySink> {
    /// Source of the inbound events
    feed: F,
    /// Destination of the replies
    sink: S,
    /// Command engine, owner of the FOODCON status
    dispatcher: Dispatcher,
    /// Seconds between two polls of the feed
    polling_interval: u64,
}

impl Bot<SlackSync<SlackRequester>, SlackSender<SlackRequester>> {
    /// Creates a new Bot connected to Slack.
    ///
    /// Asks Slack who the bot is, so mentions can be recognised, and prepares
    /// the polling of the configured channels.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected or Slack cannot be reached.
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let requester = SlackRequester::new(&config.slack.api_url, &config.slack.token);
        let identity = resolve_identity(&requester).await?;

        let feed = SlackSync::new(requester.clone(), config.slack.channels);
        let sink = SlackSender::new(requester);

        Ok(Bot::with_parts(
            feed,
            sink,
            Dispatcher::new(identity),
            config.slack.polling_interval,
        ))
    }
}

impl<F: EventFeed, S: ReplySink> Bot<F, S> {
    /// Creates a Bot from already built parts.
    pub fn with_parts(feed: F, sink: S, dispatcher: Dispatcher, polling_interval: u64) -> Self {
        Bot {
            feed,
            sink,
            dispatcher,
            polling_interval,
        }
    }

    /// Starts polling the feed, forever.
    ///
    /// The first tick happens immediately. Failures of a cycle are logged and
    /// the next cycle runs as usual.
    pub async fn start(mut self) {
        info!(
            "polling slack every {} seconds, status is {:?}",
            self.polling_interval,
            self.dispatcher.status()
        );
        let mut interval = time::interval(Duration::from_secs(self.polling_interval));

        loop {
            interval.tick().await;
            self.poll_once().await;
        }
    }

    /// Runs one polling cycle and returns the number of replies sent.
    pub async fn poll_once(&mut self) -> usize {
        let events = self.feed.poll().await;
        let mut sent = 0;

        for event in &events {
            let Some(reply) = self.dispatcher.dispatch(event) else {
                continue;
            };

            // A lost reply is not retried, the status is already updated
            match self.sink.send(&reply.channel, &reply.text).await {
                Ok(()) => sent += 1,
                Err(e) => error!("failed to send reply in {}: {}", reply.channel, e),
            }
        }

        if !events.is_empty() {
            debug!("{} events handled, {} replies sent", events.len(), sent);
        }

        sent
    }
}

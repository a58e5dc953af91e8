//! Posting replies to Slack.

use log::debug;

use crate::{
    events::ReplySink,
    slack::{SlackError, requester::Requester},
};

/// Posts the bot replies with `chat.postMessage`.
pub struct SlackSender<R: Requester> {
    /// Slack requester to interact with the Web API
    requester: R,
}

impl<R: Requester> SlackSender<R> {
    pub fn new(requester: R) -> Self {
        SlackSender { requester }
    }
}

impl<R: Requester> ReplySink for SlackSender<R> {
    async fn send(&self, channel: &str, text: &str) -> Result<(), anyhow::Error> {
        let response = self
            .requester
            .post_message(channel, text)
            .await
            .map_err(SlackError::from)?;

        if !response.ok {
            return Err(SlackError::api("chat.postMessage", response.error).into());
        }

        debug!("reply posted in {} at {:?}", channel, response.ts);
        Ok(())
    }
}

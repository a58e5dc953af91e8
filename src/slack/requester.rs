//! HTTP client for the Slack Web API.
//!
//! This module provides the [`SlackRequester`] struct for calling the few Slack
//! methods the bot needs: `auth.test`, `conversations.history` and
//! `chat.postMessage`. Every call is authenticated with the bot token.

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Error};
use serde_json::json;

use crate::slack::response_structs::{AuthTestResponse, HistoryResponse, PostMessageResponse};

/// HTTP client for requesting the Slack Web API.
#[derive(Clone)]
pub struct SlackRequester {
    /// Base URL of the Web API, `https://slack.com/api` in production
    url: String,
    /// Bot token (`xoxb-...`)
    token: String,
    /// HTTP client
    client: Client,
}

/// Trait for making requests to the Slack Web API.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Identifies the owner of the token.
    async fn auth_test(&self) -> Result<AuthTestResponse, Error>;
    /// Fetches up to `limit` messages of a channel posted between `oldest` and
    /// `latest`, newest first.
    async fn get_history(
        &self,
        channel: &str,
        oldest: Option<String>,
        latest: Option<String>,
        limit: u32,
    ) -> Result<HistoryResponse, Error>;
    /// Posts a message in a channel.
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse, Error>;
}

impl SlackRequester {
    /// Create a new [SlackRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Slack Web API, without trailing slash.
    /// * `token` - The bot token.
    pub fn new(url: &str, token: &str) -> Self {
        let client = reqwest::Client::new();
        SlackRequester {
            url: url.to_string(),
            token: token.to_string(),
            client,
        }
    }
}

impl Requester for SlackRequester {
    /// Request `POST /auth.test` to know who the bot is.
    ///
    /// ```text
    /// { "ok": true, "user_id": "U0123ABC", "team_id": "T0123", ... }
    /// ```
    async fn auth_test(&self) -> Result<AuthTestResponse, Error> {
        let url = format!("{}/auth.test", &self.url);
        info!("request bot identity");

        let response: AuthTestResponse = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .json()
            .await?;

        debug!("response from {} -> {}", &url, &response);

        Ok(response)
    }

    /// Request `GET /conversations.history?channel={channel}&limit={limit}&oldest={oldest}&latest={latest}`.
    ///
    /// `oldest` and `latest` are exclusive, so the messages they point to are
    /// not returned again.
    async fn get_history(
        &self,
        channel: &str,
        oldest: Option<String>,
        latest: Option<String>,
        limit: u32,
    ) -> Result<HistoryResponse, Error> {
        let url = format!("{}/conversations.history", &self.url);
        debug!(
            "request {}?channel={}&limit={}&oldest={:?}&latest={:?}",
            &url, channel, limit, oldest, latest
        );

        let mut query = vec![("channel", channel.to_owned()), ("limit", limit.to_string())];
        if let Some(oldest) = oldest {
            query.push(("oldest", oldest));
        }
        if let Some(latest) = latest {
            query.push(("latest", latest));
        }

        let response: HistoryResponse = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        debug!(
            "response from {}?channel={} -> ok={}, {} messages",
            &url,
            channel,
            response.ok,
            response.messages.len()
        );

        Ok(response)
    }

    /// Request `POST /chat.postMessage` with a JSON body `{ channel, text }`.
    async fn post_message(&self, channel: &str, text: &str) -> Result<PostMessageResponse, Error> {
        let url = format!("{}/chat.postMessage", &self.url);
        debug!("post to {}: {}", channel, text);

        let response: PostMessageResponse = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "channel": channel, "text": text }))
            .send()
            .await?
            .json()
            .await?;

        debug!("response from {} -> {:?}", &url, &response);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const TOKEN: &str = "xoxb-test";

    #[tokio::test]
    async fn test_auth_test() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": true, "url": "https://team.slack.com/", "user_id": "UFOODCON", "bot_id": "B1"}"#;

        server
            .mock("POST", "/auth.test")
            .match_header("authorization", "Bearer xoxb-test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let response = requester.auth_test().await.unwrap();
        assert!(response.ok);
        assert_eq!(response.user_id.as_deref(), Some("UFOODCON"));
    }

    #[tokio::test]
    async fn test_get_history() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{"ok": true, "messages": [
            {"type": "message", "text": "second", "ts": "1700000002.000200"},
            {"type": "message", "text": "first", "ts": "1700000001.000100"}
        ]}"#;

        server
            .mock("GET", "/conversations.history")
            .match_header("authorization", "Bearer xoxb-test")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".to_owned(), "CFOOD".to_owned()),
                Matcher::UrlEncoded("limit".to_owned(), "100".to_owned()),
                Matcher::UrlEncoded("oldest".to_owned(), "1700000000.000000".to_owned()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let history = requester
            .get_history("CFOOD", Some("1700000000.000000".to_owned()), None, 100)
            .await
            .unwrap();
        assert!(history.ok);
        assert_eq!(history.messages.len(), 2);
        assert_eq!(history.messages[0].text.as_deref(), Some("second"));
        assert_eq!(history.messages[1].text.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_get_history_without_oldest() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/conversations.history")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".to_owned(), "CFOOD".to_owned()),
                Matcher::UrlEncoded("limit".to_owned(), "1".to_owned()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true, "messages": []}"#)
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let history = requester.get_history("CFOOD", None, None, 1).await.unwrap();
        assert!(history.messages.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_history_with_latest() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/conversations.history")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("channel".to_owned(), "CFOOD".to_owned()),
                Matcher::UrlEncoded("oldest".to_owned(), "10.0".to_owned()),
                Matcher::UrlEncoded("latest".to_owned(), "20.0".to_owned()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true, "messages": [], "has_more": true}"#)
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let history = requester
            .get_history("CFOOD", Some("10.0".to_owned()), Some("20.0".to_owned()), 100)
            .await
            .unwrap();
        assert!(history.has_more);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_message() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::Json(json!({
                "channel": "CFOOD",
                "text": "OK, got it. Sounds tasty :eyes:"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true, "channel": "CFOOD", "ts": "1700000003.000300"}"#)
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let response = requester
            .post_message("CFOOD", "OK, got it. Sounds tasty :eyes:")
            .await
            .unwrap();
        assert!(response.ok);
        assert_eq!(response.ts.as_deref(), Some("1700000003.000300"));
    }

    #[tokio::test]
    async fn test_post_message_invalid_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("POST", "/chat.postMessage")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let requester = SlackRequester::new(&url, TOKEN);
        let response = requester.post_message("CFOOD", "hello").await;
        assert!(response.is_err());
    }
}

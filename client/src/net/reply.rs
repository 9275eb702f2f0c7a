//! Reply transport used by the chat widget.
//!
//! Client-side (hydrate): posts the utterance to the server's reply route via
//! `gloo-net`. Server-side (SSR): no request is made and the fallback is
//! returned, since replies are only requested from the browser.
//!
//! ERROR HANDLING
//! ==============
//! `fetch_reply` never fails. Network errors, non-OK statuses and malformed
//! bodies all degrade to `FALLBACK_REPLY` so the chat always shows a message.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use std::future::Future;

use super::types::REPLY_ENDPOINT;
use crate::state::chat::FALLBACK_REPLY;

/// Source of bot replies for the conversation controller.
pub trait ReplyClient {
    /// Produce the bot reply for one user utterance. Never fails.
    fn fetch_reply(&self, utterance: &str) -> impl Future<Output = String>;
}

/// `ReplyClient` backed by the server's `/api/chat/reply` route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReplyClient {
    endpoint: String,
}

impl HttpReplyClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl Default for HttpReplyClient {
    fn default() -> Self {
        Self::new(REPLY_ENDPOINT)
    }
}

impl ReplyClient for HttpReplyClient {
    async fn fetch_reply(&self, utterance: &str) -> String {
        request_reply(&self.endpoint, utterance)
            .await
            .unwrap_or_else(|| FALLBACK_REPLY.to_owned())
    }
}

#[allow(clippy::unused_async)]
async fn request_reply(endpoint: &str, utterance: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::ReplyRequest { text: utterance.to_owned() };
        let resp = match gloo_net::http::Request::post(endpoint).json(&payload) {
            Ok(req) => req.send().await,
            Err(e) => Err(e),
        };
        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("reply request failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("reply request returned status {}", resp.status());
            return None;
        }
        let body = resp.text().await.ok()?;
        parse_reply_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, utterance);
        None
    }
}

/// Extract the reply text from a route response body.
///
/// Returns `None` for malformed bodies and blank replies.
#[cfg(any(test, feature = "hydrate"))]
fn parse_reply_body(body: &str) -> Option<String> {
    let resp: super::types::ReplyResponse = serde_json::from_str(body).ok()?;
    if resp.reply.trim().is_empty() {
        return None;
    }
    Some(resp.reply)
}

use std::sync::{Arc, Mutex};

use client::state::chat::FALLBACK_REPLY;

use super::*;
use crate::llm::ReplyGenerator;

// =============================================================================
// MockReplies
// =============================================================================

struct MockReplies {
    reply: &'static str,
    seen: Mutex<Vec<String>>,
}

impl MockReplies {
    fn new(reply: &'static str) -> Arc<Self> {
        Arc::new(Self { reply, seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait::async_trait]
impl ReplyGenerator for MockReplies {
    async fn fetch_reply(&self, utterance: &str) -> String {
        self.seen.lock().unwrap().push(utterance.to_owned());
        self.reply.to_owned()
    }
}

fn request(text: &str) -> Json<ReplyRequest> {
    Json(ReplyRequest { text: text.to_owned() })
}

// =============================================================================
// reply
// =============================================================================

#[tokio::test]
async fn reply_returns_generated_text() {
    let mock = MockReplies::new("4");
    let state = AppState::new(mock.clone());

    let Json(resp) = reply(State(state), request("What is 2+2?")).await.unwrap();

    assert_eq!(resp.reply, "4");
    assert_eq!(*mock.seen.lock().unwrap(), ["What is 2+2?"]);
}

#[tokio::test]
async fn reply_passes_fallback_through() {
    let state = AppState::new(MockReplies::new(FALLBACK_REPLY));

    let Json(resp) = reply(State(state), request("hi")).await.unwrap();

    assert_eq!(resp.reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn reply_rejects_blank_text() {
    let mock = MockReplies::new("unused");
    let state = AppState::new(mock.clone());

    let status = reply(State(state), request("   ")).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(mock.seen.lock().unwrap().is_empty());
}

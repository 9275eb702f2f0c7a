//! Shared wire DTOs for the chat reply route.
//!
//! DESIGN
//! ======
//! The server depends on this crate with the `ssr` feature and uses the same
//! types for its `/api/chat/reply` handler, so both sides of the boundary stay
//! in lockstep.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Path of the server route that produces bot replies.
pub const REPLY_ENDPOINT: &str = "/api/chat/reply";

/// Body of `POST /api/chat/reply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    /// The user's utterance, as typed.
    pub text: String,
}

/// Response of `POST /api/chat/reply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResponse {
    /// Model reply, or the fallback apology when none could be extracted.
    pub reply: String,
}

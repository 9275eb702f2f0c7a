//! Chat reply route used by the navbar's chatbot.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{ReplyRequest, ReplyResponse};

use crate::state::AppState;

/// `POST /api/chat/reply`: produce the bot reply for one utterance.
///
/// Always answers 200 with a displayable reply; generation failures arrive
/// here already replaced by the fallback text. Blank input is rejected with
/// 400 since the widget never sends it.
pub async fn reply(
    State(state): State<AppState>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<ReplyResponse>, StatusCode> {
    if req.text.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let reply = state.replies.fetch_reply(&req.text).await;
    Ok(Json(ReplyResponse { reply }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

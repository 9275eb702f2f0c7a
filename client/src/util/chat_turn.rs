//! Drives one chat submission from input to resolved reply.
//!
//! DESIGN
//! ======
//! The turn is split in two so the UI never waits on the network:
//!
//! - `begin_turn` runs synchronously in the submit handler. It appends the
//!   user message and the placeholder, so "Typing..." is visible before any
//!   request leaves.
//! - `finish_turn` awaits the reply client and splices the reply into the log.
//!
//! The conversation is reached through a `ConversationHandle`, which reports
//! whether its owner is still alive. A reply that arrives after the navbar
//! was torn down is dropped instead of written into a disposed log.

#[cfg(test)]
#[path = "chat_turn_test.rs"]
mod chat_turn_test;

use leptos::prelude::*;

use crate::net::reply::ReplyClient;
use crate::state::chat::{ChatState, PendingTurn};

/// Mutable access to a conversation that may have been disposed.
pub trait ConversationHandle {
    /// Apply `f` to the chat state, or return `None` if it no longer exists.
    fn update_if_live<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
}

impl ConversationHandle for RwSignal<ChatState> {
    fn update_if_live<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input, a reply already pending, or a disposed conversation.
    Ignored,
    /// The placeholder was replaced with the reply.
    Resolved,
    /// The reply arrived but could not be applied and was dropped.
    Discarded,
}

/// Start a turn from the conversation's current input.
///
/// Calls `on_change` after the user message lands in the log.
pub fn begin_turn<H: ConversationHandle>(chat: &H, on_change: impl Fn()) -> Option<PendingTurn> {
    let turn = chat.update_if_live(ChatState::submit).flatten()?;
    log::debug!("chat turn started at index {}", turn.placeholder_index);
    on_change();
    Some(turn)
}

/// Fetch the reply for `turn` and replace its placeholder.
///
/// Calls `on_change` after the reply lands in the log.
pub async fn finish_turn<H, C>(chat: &H, client: &C, turn: PendingTurn, on_change: impl Fn()) -> TurnOutcome
where
    H: ConversationHandle,
    C: ReplyClient,
{
    let reply = client.fetch_reply(&turn.utterance).await;

    match chat.update_if_live(|state| state.resolve(&turn, reply)) {
        Some(true) => {
            on_change();
            TurnOutcome::Resolved
        }
        Some(false) => {
            log::warn!("reply for index {} no longer matches the log tail", turn.placeholder_index);
            TurnOutcome::Discarded
        }
        None => {
            log::debug!("conversation disposed before reply arrived");
            TurnOutcome::Discarded
        }
    }
}

/// Run a full turn: `begin_turn` followed by `finish_turn`.
pub async fn run_turn<H, C>(chat: &H, client: &C, on_change: impl Fn()) -> TurnOutcome
where
    H: ConversationHandle,
    C: ReplyClient,
{
    let Some(turn) = begin_turn(chat, &on_change) else {
        return TurnOutcome::Ignored;
    };
    finish_turn(chat, client, turn, on_change).await
}

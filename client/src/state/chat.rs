//! Chat widget state: the conversation log and the submission state machine.
//!
//! DESIGN
//! ======
//! `ConversationLog` is the ordered message store. It only grows, except for
//! the single replace-at-tail used to turn the pending placeholder into the
//! final reply. `ChatState` wraps the log with the input buffer and the
//! outstanding-reply marker, and owns every transition of a submission cycle:
//!
//! Idle -> `submit` -> (user turn + placeholder appended) -> `resolve` -> Idle
//!
//! Only one reply may be outstanding. `submit` refuses while a placeholder is
//! pending, so the log never holds two placeholders at once.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Text shown in the bot bubble while a reply is in flight.
pub const PENDING_REPLY_TEXT: &str = "Typing...";

/// Reply substituted whenever the remote reply cannot be produced.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't understand that.";

/// Author of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat turn. Its position in the log is its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }

    #[must_use]
    pub fn pending() -> Self {
        Self::bot(PENDING_REPLY_TEXT)
    }
}

// =============================================================
// MESSAGE STORE
// =============================================================

/// Ordered, append-only log of chat turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
}

impl ConversationLog {
    /// Add a message at the end of the log.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Overwrite the message at the highest index.
    ///
    /// Returns `false` and leaves the log untouched when it is empty.
    pub fn replace_last(&mut self, message: ChatMessage) -> bool {
        match self.messages.last_mut() {
            Some(slot) => {
                *slot = message;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// =============================================================
// CONVERSATION CONTROLLER
// =============================================================

/// Receipt for a submitted turn.
///
/// Carries the utterance to send and the log position of the placeholder the
/// eventual reply is allowed to replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub utterance: String,
    pub placeholder_index: usize,
}

/// State for the chat widget.
///
/// Lives as long as the owning navbar, not as long as the chat panel is open.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub log: ConversationLog,
    pub input: String,
    pending: Option<usize>,
}

impl ChatState {
    /// True while a reply is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True if the message at `index` is the outstanding placeholder.
    #[must_use]
    pub fn is_pending_at(&self, index: usize) -> bool {
        self.pending == Some(index)
    }

    /// Whether the Send action should be enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_pending()
    }

    /// Start a turn from the current input.
    ///
    /// Appends the user message, clears the input and appends the
    /// placeholder. Blank input, or a reply already outstanding, leaves the
    /// state untouched and returns `None`.
    pub fn submit(&mut self) -> Option<PendingTurn> {
        if !self.can_submit() {
            return None;
        }

        let utterance = std::mem::take(&mut self.input);
        self.log.append(ChatMessage::user(utterance.clone()));
        self.log.append(ChatMessage::pending());

        let placeholder_index = self.log.len() - 1;
        self.pending = Some(placeholder_index);
        Some(PendingTurn { utterance, placeholder_index })
    }

    /// Replace the turn's placeholder with the resolved reply text.
    ///
    /// A reply identical to the placeholder text is stored as
    /// `FALLBACK_REPLY`, so the placeholder literal only ever marks the
    /// outstanding turn. Returns `false` if the ticket no longer points at the
    /// pending tail.
    pub fn resolve(&mut self, turn: &PendingTurn, reply: impl Into<String>) -> bool {
        let at_tail = turn.placeholder_index + 1 == self.log.len();
        if !self.is_pending_at(turn.placeholder_index) || !at_tail {
            return false;
        }

        let mut reply = reply.into();
        if reply == PENDING_REPLY_TEXT {
            reply = FALLBACK_REPLY.to_owned();
        }
        self.log.replace_last(ChatMessage::bot(reply));
        self.pending = None;
        true
    }
}

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `chat` holds the conversation, `ui` holds panel
//! visibility. Components receive them as `RwSignal`s owned by the navbar.

pub mod chat;
pub mod ui;

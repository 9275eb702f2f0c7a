//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate async orchestration and browser concerns from
//! component rendering so they can be tested without a DOM.

pub mod chat_turn;
pub mod scroll;

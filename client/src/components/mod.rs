//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the chat and panel state and hands signals down to the
//! side menu and chat dialog it renders.

pub mod chat_dialog;
pub mod navbar;
pub mod side_menu;

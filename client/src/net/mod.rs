//! Networking modules for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `reply` fetches bot replies from the server and `types` defines the shared
//! wire schema for that route.

pub mod reply;
pub mod types;

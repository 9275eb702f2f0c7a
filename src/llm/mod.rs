//! LLM: the Gemini reply client behind the chat widget.
//!
//! DESIGN
//! ======
//! Configuration is read from the environment once at startup and handed to
//! `GeminiClient::new`. Routes depend on the `ReplyGenerator` trait rather
//! than the concrete client, so tests can substitute a canned generator.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::ReplyGenerator;

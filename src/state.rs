//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the reply generator, which carries the credential it was built with;
//! nothing in the state changes after startup.

use std::sync::Arc;

use crate::llm::ReplyGenerator;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub replies: Arc<dyn ReplyGenerator>,
}

impl AppState {
    #[must_use]
    pub fn new(replies: Arc<dyn ReplyGenerator>) -> Self {
        Self { replies }
    }
}

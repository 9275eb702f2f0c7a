//! LLM types: the reply seam used by routes and the client error type.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while generating a reply.
///
/// These never reach the chat user; `ReplyGenerator::fetch_reply` logs them
/// and substitutes the fallback reply.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The credential environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the generation endpoint failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The generation endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The response parsed but held no reply text at the expected path.
    #[error("API response contained no reply text")]
    EmptyReply,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REPLY SEAM
// =============================================================================

/// Produces a bot reply for a single user utterance.
///
/// Implementations never fail: any error degrades to the fallback reply.
#[async_trait::async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn fetch_reply(&self, utterance: &str) -> String;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper: one single-turn request per utterance, reply text read
//! from `candidates[0].content.parts[0].text`. Request building and response
//! parsing are pure functions for testability.

use std::time::Duration;

use client::state::chat::FALLBACK_REPLY;
use serde::{Deserialize, Serialize};

use super::config::{API_KEY_VAR, GeminiConfig};
use super::types::{LlmError, ReplyGenerator};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build a client around `config`. The credential is fixed from here on.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build a client from `GEMINI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GeminiConfig::from_env())
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Build the `generateContent` POST for one utterance.
    fn build_request(&self, utterance: &str) -> Result<reqwest::Request, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingApiKey { var: API_KEY_VAR.into() })?;

        self.http
            .post(generate_content_url(&self.config.base_url, &self.config.model))
            .query(&[("key", api_key)])
            .json(&GenerateRequest::single_turn(utterance))
            .build()
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))
    }

    /// Ask the model for a reply, surfacing every failure as `LlmError`.
    ///
    /// # Errors
    ///
    /// Returns an error on a missing credential, transport failure, non-2xx
    /// status, unparseable body, or a body without reply text.
    pub async fn generate(&self, utterance: &str) -> Result<String, LlmError> {
        let request = self.build_request(utterance)?;

        // Errors carry the request URL, which embeds the key; strip it.
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.without_url().to_string()))?;

        if !(200..300).contains(&status) {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl ReplyGenerator for GeminiClient {
    async fn fetch_reply(&self, utterance: &str) -> String {
        match self.generate(utterance).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, model = %self.config.model, "gemini reply failed; using fallback");
                FALLBACK_REPLY.to_owned()
            }
        }
    }
}

fn generate_content_url(base_url: &str, model: &str) -> String {
    format!("{base_url}/v1beta/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn single_turn(text: &'a str) -> Self {
        Self { contents: [RequestContent { parts: [RequestPart { text }] }] }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: GenerateResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    api.candidates
        .into_iter()
        .flatten()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().flatten().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(LlmError::EmptyReply)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

//! Provider dispatch: one HTTP adapter per [`ProviderKind`].
//!
//! Each adapter builds the provider-specific request (system instruction +
//! user prompt), calls the text-generation endpoint once, and extracts the
//! primary completion text. All adapters normalize to the same contract:
//! trimmed plain text on success, [`Error::GenerationFailed`] on any
//! transport, auth, or provider-side error. No retries; the orchestrator
//! decides how to react to a failure.

use serde_json::{json, Value};
use std::time::Duration;

use super::kind::ProviderKind;
use super::resolve::Resolved;
use crate::constants;
use crate::error::Error;

/// A configured provider ready to handle generation requests.
///
/// Holds no live connection: a fresh HTTP client is built per call, so
/// no credentials are cached in shared mutable state between calls.
pub struct Provider {
    kind: ProviderKind,
    model: String,
    api_key: String,
    base_url: String,
}

impl Provider {
    /// Creates a provider from a resolved (provider, model, key) triple.
    pub fn from_resolved(resolved: &Resolved) -> Self {
        let base_url = match resolved.kind {
            ProviderKind::OpenAi => constants::OPENAI_BASE_URL,
            ProviderKind::Claude => constants::CLAUDE_BASE_URL,
            ProviderKind::Grok => constants::GROK_BASE_URL,
            ProviderKind::Gemini => constants::GEMINI_BASE_URL,
        };
        Self {
            kind: resolved.kind,
            model: resolved.model.clone(),
            api_key: resolved.api_key.clone(),
            base_url: base_url.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests to point at a mock server.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a single-turn generation request and returns the trimmed
    /// completion text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationFailed`] on any failure; the cause
    /// string carries the provider's error body when one was returned.
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let text = match self.kind {
            ProviderKind::OpenAi | ProviderKind::Grok => self.chat_completions(prompt).await?,
            ProviderKind::Claude => self.claude_messages(prompt).await?,
            ProviderKind::Gemini => self.gemini_generate(prompt).await?,
        };
        Ok(text.trim().to_string())
    }

    /// OpenAI-compatible chat completions (OpenAI and Grok share this shape).
    async fn chat_completions(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": constants::SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
            "temperature": constants::TEMPERATURE,
        });

        let response = http_client()?
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(format!("request to {} failed: {e}", self.kind.label())))?;
        let json = check_and_parse(self.kind, response).await?;

        json.get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|t| t.as_str())
            .map(String::from)
            .ok_or_else(|| malformed(self.kind))
    }

    /// Anthropic Messages API.
    async fn claude_messages(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "max_tokens": constants::MAX_TOKENS,
            "system": constants::SYSTEM_INSTRUCTION,
            "messages": [
                { "role": "user", "content": prompt },
            ],
        });

        let response = http_client()?
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", constants::CLAUDE_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(format!("request to {} failed: {e}", self.kind.label())))?;
        let json = check_and_parse(self.kind, response).await?;

        json.get("content")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|block| block.get("text"))
            .and_then(|t| t.as_str())
            .map(String::from)
            .ok_or_else(|| malformed(self.kind))
    }

    /// Google Gemini generateContent API. The API key travels as a query
    /// parameter; the system instruction goes in `systemInstruction`.
    async fn gemini_generate(&self, prompt: &str) -> Result<String, Error> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key,
        );
        let body = json!({
            "systemInstruction": {
                "parts": [{ "text": constants::SYSTEM_INSTRUCTION }]
            },
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] },
            ],
        });

        let response = http_client()?
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(format!("request to {} failed: {e}", self.kind.label())))?;
        let json = check_and_parse(self.kind, response).await?;

        json.get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|cand| cand.get("content"))
            .and_then(|cont| cont.get("parts"))
            .and_then(|parts| parts.as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part.get("text"))
            .and_then(|t| t.as_str())
            .map(String::from)
            .ok_or_else(|| malformed(self.kind))
    }
}

/// Builds a fresh HTTP client with connect/read timeouts.
fn http_client() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(constants::REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::GenerationFailed(format!("failed to build HTTP client: {e}")))
}

/// Turns a non-success status into [`Error::GenerationFailed`] carrying the
/// provider's error body, and parses the success body as JSON.
async fn check_and_parse(kind: ProviderKind, response: reqwest::Response) -> Result<Value, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::GenerationFailed(format!(
            "{} API error ({status}): {body}",
            kind.label()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| Error::GenerationFailed(format!("invalid JSON from {}: {e}", kind.label())))
}

fn malformed(kind: ProviderKind) -> Error {
    Error::GenerationFailed(format!("no completion text in {} response", kind.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::resolve::Resolved;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(kind: ProviderKind, model: &str, base_url: String) -> Provider {
        Provider::from_resolved(&Resolved {
            kind,
            model: model.to_string(),
            api_key: "test-key".to_string(),
        })
        .with_base_url(base_url)
    }

    #[tokio::test]
    async fn openai_sends_bearer_auth_and_extracts_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": constants::SYSTEM_INSTRUCTION },
                    { "role": "user", "content": "hello" },
                ],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "  # SOUL\ntext  \n" } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(ProviderKind::OpenAi, "gpt-4o", server.uri())
            .generate("hello")
            .await
            .unwrap();
        assert_eq!(text, "# SOUL\ntext");
    }

    #[tokio::test]
    async fn grok_uses_the_openai_compatible_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({ "model": "grok-3" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "grok says" } }]
            })))
            .mount(&server)
            .await;

        let text = provider(ProviderKind::Grok, "grok-3", server.uri())
            .generate("hello")
            .await
            .unwrap();
        assert_eq!(text, "grok says");
    }

    #[tokio::test]
    async fn claude_sends_api_key_header_and_extracts_first_block() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", constants::CLAUDE_API_VERSION))
            .and(body_partial_json(serde_json::json!({
                "system": constants::SYSTEM_INSTRUCTION,
                "max_tokens": 4096,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{ "type": "text", "text": "claude says" }]
            })))
            .mount(&server)
            .await;

        let text = provider(ProviderKind::Claude, "claude-sonnet-4-20250514", server.uri())
            .generate("hello")
            .await
            .unwrap();
        assert_eq!(text, "claude says");
    }

    #[tokio::test]
    async fn gemini_passes_key_as_query_param_and_extracts_first_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "gemini says" }] } }
                ]
            })))
            .mount(&server)
            .await;

        let text = provider(ProviderKind::Gemini, "gemini-2.0-flash", server.uri())
            .generate("hello")
            .await
            .unwrap();
        assert_eq!(text, "gemini says");
    }

    #[tokio::test]
    async fn provider_error_status_surfaces_as_generation_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = provider(ProviderKind::OpenAi, "gpt-4o", server.uri())
            .generate("hello")
            .await
            .unwrap_err();
        match err {
            Error::GenerationFailed(cause) => {
                assert!(cause.contains("401"));
                assert!(cause.contains("invalid api key"));
            }
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_completion_text_is_a_failure_not_empty_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": []
            })))
            .mount(&server)
            .await;

        let err = provider(ProviderKind::Claude, "claude-sonnet-4-20250514", server.uri())
            .generate("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
    }
}

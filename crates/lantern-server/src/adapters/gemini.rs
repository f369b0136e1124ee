//! Gemini implementation of LlmProvider
//!
//! Calls the `generateContent` REST endpoint with reqwest. Every failure
//! (transport, timeout, non-2xx, empty reply) surfaces as
//! `DomainError::ExternalService`; there are no retries.

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use lantern::{CompletionOptions, DomainError, LlmProvider};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::ExternalService(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at another endpoint root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The key travels in a header so it never appears in URLs or error text
    fn build_request(&self, body: &GenerateContentRequest) -> Result<Request, GeminiError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        self.client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .build()
            .map_err(|err| GeminiError::RequestFailed(err.without_url().to_string()))
    }

    async fn generate(&self, body: &GenerateContentRequest) -> Result<Value, GeminiError> {
        let request = self.build_request(body)?;

        let response = self.client.execute(request).await.map_err(|err| {
            if err.is_timeout() {
                GeminiError::Timeout
            } else {
                GeminiError::RequestFailed(err.without_url().to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|err| GeminiError::ParseError(err.without_url().to_string()))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, DomainError> {
        let body = GenerateContentRequest::new(prompt, options);
        let payload = self
            .generate(&body)
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        extract_text(&payload)
            .ok_or_else(|| DomainError::ExternalService(GeminiError::EmptyResponse.to_string()))
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerateContentRequest {
    fn new(prompt: &str, options: &CompletionOptions) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: options.max_tokens,
                temperature: options.temperature,
            },
        }
    }
}

/// Gemini call error types
#[derive(Debug, Clone, Error)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Rate limited")]
    RateLimited,
    #[error("Gemini returned no text")]
    EmptyResponse,
}

// ============================================
// Helper Functions
// ============================================

/// Concatenate the text parts of the first candidate
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited;
    }

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    GeminiError::ApiError {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_joins_parts_of_first_candidate() {
        let payload = json!({
            "candidates": [
                {
                    "content": { "parts": [{ "text": "{\"a\":" }, { "text": " 1}" }] },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        });
        assert_eq!(extract_text(&payload).as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_extract_text_missing_or_blank() {
        assert_eq!(extract_text(&json!({})), None);
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
        let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] });
        assert_eq!(extract_text(&blank), None);
    }

    #[test]
    fn test_map_http_error_reads_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid"}}"#.to_string();
        match map_http_error(StatusCode::BAD_REQUEST, body) {
            GeminiError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_rate_limited_and_plain_body() {
        assert!(matches!(
            map_http_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            GeminiError::RateLimited
        ));
        match map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string()) {
            GeminiError::ApiError { message, .. } => assert_eq!(message, "upstream down"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_request_body_carries_prompt_and_options() {
        let body = GenerateContentRequest::new("hello", &CompletionOptions::default());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn test_api_key_sent_in_header_not_url() {
        let provider = GeminiProvider::new("SUPERSECRET", "gemini-2.0-flash", Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://127.0.0.1:9/");
        let body = GenerateContentRequest::new("hello", &CompletionOptions::default());
        let request = provider.build_request(&body).unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:9/gemini-2.0-flash:generateContent"
        );
        assert_eq!(request.headers()[API_KEY_HEADER], "SUPERSECRET");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_hides_api_key() {
        let provider = GeminiProvider::new("SUPERSECRET", "gemini-2.0-flash", Duration::from_millis(500))
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = provider.complete_simple("hello").await.unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
        assert!(!err.to_string().contains("SUPERSECRET"));
    }
}

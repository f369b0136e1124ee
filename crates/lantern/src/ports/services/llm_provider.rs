//! LLM Provider Port
//!
//! The values analysis is a single prompt in, text out. Providers
//! (Gemini today) can be swapped or mocked behind this trait.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Generation settings passed through to the provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(4096),
            temperature: Some(0.7),
        }
    }
}

/// LLM Provider interface
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one user prompt and return the full reply text
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, DomainError>;

    /// [`LlmProvider::complete`] with default options
    async fn complete_simple(&self, prompt: &str) -> Result<String, DomainError> {
        self.complete(prompt, &CompletionOptions::default()).await
    }

    /// Get the provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}

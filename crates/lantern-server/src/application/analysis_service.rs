//! Values Analysis Application Service (Use Case)
//!
//! Renders the testimony into the analysis prompt, makes a single call to
//! the configured LLM provider, and reads the reply. No retries, caching
//! or rate limiting.

use std::sync::Arc;

use lantern::{
    parse_analysis_reply, render_analysis_prompt, AnalysisError, AnalysisOutcome, LlmProvider,
    Testimony,
};

/// Application service for the values analysis
pub struct AnalysisService<P: LlmProvider + ?Sized> {
    provider: Option<Arc<P>>,
}

impl<P: LlmProvider + ?Sized> AnalysisService<P> {
    /// `None` means no credential is configured
    pub fn new(provider: Option<Arc<P>>) -> Self {
        Self { provider }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn analyze(&self, testimony: &Testimony) -> Result<AnalysisOutcome, AnalysisError> {
        let provider = self.provider.as_ref().ok_or(AnalysisError::Configuration)?;

        let prompt = render_analysis_prompt(testimony);
        let reply = provider.complete_simple(&prompt).await.map_err(|e| {
            tracing::error!(
                "Analysis call to {} ({}) failed: {}",
                provider.provider_name(),
                provider.model_id(),
                e
            );
            AnalysisError::Upstream(e.to_string())
        })?;

        let outcome = parse_analysis_reply(reply);
        match &outcome {
            Ok(AnalysisOutcome::Parsed(analysis)) => tracing::info!(
                "🔮 Analysis complete: {} / {} / {}",
                analysis.primary_value.name,
                analysis.secondary_value.name,
                analysis.tertiary_value.name
            ),
            Ok(AnalysisOutcome::Unparsed { .. }) => {
                tracing::warn!("⚠️  Analysis reply contained no JSON object")
            }
            Err(e) => tracing::warn!("⚠️  {}", e),
        }
        outcome
    }
}

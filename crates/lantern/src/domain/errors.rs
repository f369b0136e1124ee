//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type}")]
    NotFound { entity_type: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
        }
    }
}

/// Values analysis errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No credential for the text generation service
    #[error("Gemini API key not configured")]
    Configuration,

    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// A JSON object was found in the reply but could not be read
    #[error("Failed to parse analysis: {reason}")]
    Parse { raw: String, reason: String },
}

impl From<DomainError> for AnalysisError {
    fn from(err: DomainError) -> Self {
        AnalysisError::Upstream(err.to_string())
    }
}

//! HTTP error mapping
//!
//! Every failure leaves the API as `{ "error": ... }` with an optional
//! `raw` field carrying unreadable model output.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use lantern::{AnalysisError, DomainError};

use crate::models::ErrorResponse;

pub const ANALYSIS_FAILED: &str = "Failed to analyze responses";
pub const ANALYSIS_UNPARSED: &str = "Failed to parse analysis";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(error),
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn no_monster() -> Self {
        Self::new(StatusCode::NOT_FOUND, "No monster has been summoned")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            DomainError::Validation(msg) => Self::bad_request(msg),
            _ => {
                tracing::error!("Request failed: {}", err);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Configuration => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AnalysisError::Upstream(_) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, ANALYSIS_FAILED),
            AnalysisError::Parse { raw, .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ErrorResponse::with_raw(ANALYSIS_UNPARSED, raw),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_statuses() {
        let not_found: ApiError = DomainError::not_found("Monster").into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);

        let invalid: ApiError = DomainError::Validation("bad level".to_string()).into();
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.body.error, "bad level");

        let storage: ApiError = DomainError::Repository("down".to_string()).into();
        assert_eq!(storage.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_analysis_error_payloads() {
        let config: ApiError = AnalysisError::Configuration.into();
        assert_eq!(config.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(config.body.error, "Gemini API key not configured");
        assert!(config.body.raw.is_none());

        let upstream: ApiError = AnalysisError::Upstream("timeout".to_string()).into();
        assert_eq!(upstream.body.error, ANALYSIS_FAILED);
        assert!(upstream.body.raw.is_none());

        let parse: ApiError = AnalysisError::Parse {
            raw: "{oops}".to_string(),
            reason: "key must be a string".to_string(),
        }
        .into();
        assert_eq!(parse.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse.body.raw.as_deref(), Some("{oops}"));
    }
}

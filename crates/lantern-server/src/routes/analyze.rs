//! Analysis Routes - Values analysis of reflection answers

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use lantern::{AnalysisOutcome, CORE_VALUES};

use super::error::ANALYSIS_UNPARSED;
use super::ApiError;
use crate::models::{AnalyzeRequest, CoreValueResponse, ErrorResponse, ValueAnalysisResponse};
use crate::AppState;

/// Analyze envy/rage/loss answers into the three strongest values
///
/// A reply without a readable JSON object is still a 200, carrying the raw
/// model output under `raw`.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Values analysis", body = ValueAnalysisResponse),
        (status = 500, description = "Not configured, upstream failure or malformed analysis", body = ErrorResponse)
    ),
    tag = "Analysis"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Response, ApiError> {
    let testimony = payload.into();

    match state.analysis.analyze(&testimony).await? {
        AnalysisOutcome::Parsed(analysis) => {
            Ok(Json(ValueAnalysisResponse::from(analysis)).into_response())
        }
        AnalysisOutcome::Unparsed { raw } => {
            Ok(Json(ErrorResponse::with_raw(ANALYSIS_UNPARSED, raw)).into_response())
        }
    }
}

/// Candidate values the analysis chooses from
#[utoipa::path(
    get,
    path = "/api/values",
    responses(
        (status = 200, description = "Value catalog", body = Vec<CoreValueResponse>)
    ),
    tag = "Analysis"
)]
pub async fn list_values() -> Json<Vec<CoreValueResponse>> {
    Json(CORE_VALUES.iter().map(CoreValueResponse::from).collect())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/values", get(list_values))
}

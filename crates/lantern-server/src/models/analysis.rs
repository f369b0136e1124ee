//! Values analysis DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lantern::{CoreValue, Testimony, ValueAnalysis, ValueFinding};

/// Answers from the three reflection phases
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub envy_responses: Vec<String>,
    #[serde(default)]
    pub rage_responses: Vec<String>,
    #[serde(default)]
    pub loss_responses: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValueFindingResponse {
    pub name: String,
    /// 0 to 100
    pub confidence: u8,
    pub evidence: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValueAnalysisResponse {
    pub primary_value: ValueFindingResponse,
    pub secondary_value: ValueFindingResponse,
    pub tertiary_value: ValueFindingResponse,
    pub analysis: String,
}

/// Error payload; `raw` carries the model output when it could not be read
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CoreValueResponse {
    pub name: String,
    pub description: String,
}

impl From<AnalyzeRequest> for Testimony {
    fn from(req: AnalyzeRequest) -> Self {
        Self {
            envy: req.envy_responses,
            rage: req.rage_responses,
            loss: req.loss_responses,
        }
    }
}

impl From<ValueFinding> for ValueFindingResponse {
    fn from(finding: ValueFinding) -> Self {
        Self {
            name: finding.name,
            confidence: finding.confidence,
            evidence: finding.evidence,
        }
    }
}

impl From<ValueAnalysis> for ValueAnalysisResponse {
    fn from(analysis: ValueAnalysis) -> Self {
        Self {
            primary_value: analysis.primary_value.into(),
            secondary_value: analysis.secondary_value.into(),
            tertiary_value: analysis.tertiary_value.into(),
            analysis: analysis.analysis,
        }
    }
}

impl From<&CoreValue> for CoreValueResponse {
    fn from(value: &CoreValue) -> Self {
        Self {
            name: value.name.to_string(),
            description: value.description.to_string(),
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
        }
    }

    pub fn with_raw(error: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: Some(raw.into()),
        }
    }
}

//! Reading the model's reply into a structured values analysis

use super::json_extract::{brace_span, extract_json_object};
use crate::domain::entities::{AnalysisOutcome, ValueAnalysis};
use crate::domain::errors::AnalysisError;

/// Interpret raw model output.
///
/// No `{`...`}` at all → [`AnalysisOutcome::Unparsed`] carrying the raw text.
/// Braces that never close into an object, or an object that does not match
/// [`ValueAnalysis`] → [`AnalysisError::Parse`].
pub fn parse_analysis_reply(raw: String) -> Result<AnalysisOutcome, AnalysisError> {
    let parsed = match extract_json_object(&raw) {
        None if brace_span(&raw).is_none() => return Ok(AnalysisOutcome::Unparsed { raw }),
        None => Err("JSON object is not closed".to_string()),
        Some(span) => serde_json::from_str::<ValueAnalysis>(span)
            .map_err(|e| e.to_string())
            .and_then(|analysis| analysis.validate().map(|_| analysis)),
    };

    match parsed {
        Ok(analysis) => Ok(AnalysisOutcome::Parsed(analysis)),
        Err(reason) => Err(AnalysisError::Parse { raw, reason }),
    }
}

//! Values analysis - Testimony in, core values out

use serde::{Deserialize, Serialize};

/// Upper bound of a finding's confidence score
pub const MAX_CONFIDENCE: u8 = 100;

/// Answers given in the three reflection phases
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimony {
    pub envy: Vec<String>,
    pub rage: Vec<String>,
    pub loss: Vec<String>,
}

/// One detected value with supporting evidence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueFinding {
    pub name: String,
    pub confidence: u8,
    pub evidence: String,
}

/// Structured analysis returned by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValueAnalysis {
    pub primary_value: ValueFinding,
    pub secondary_value: ValueFinding,
    pub tertiary_value: ValueFinding,
    /// Summary; the prompt asks for at most 100 characters but it is not enforced
    pub analysis: String,
}

impl ValueAnalysis {
    pub fn findings(&self) -> [&ValueFinding; 3] {
        [&self.primary_value, &self.secondary_value, &self.tertiary_value]
    }

    /// Reject confidences outside 0..=100
    pub fn validate(&self) -> Result<(), String> {
        match self
            .findings()
            .into_iter()
            .find(|f| f.confidence > MAX_CONFIDENCE)
        {
            Some(f) => Err(format!(
                "confidence for '{}' out of range: {}",
                f.name, f.confidence
            )),
            None => Ok(()),
        }
    }
}

/// Outcome of a successful round trip to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Parsed(ValueAnalysis),
    /// The reply carried no JSON object at all
    Unparsed { raw: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(name: &str, confidence: u8) -> ValueFinding {
        ValueFinding {
            name: name.to_string(),
            confidence,
            evidence: String::new(),
        }
    }

    #[test]
    fn test_validate_rejects_confidence_above_100() {
        let mut analysis = ValueAnalysis {
            primary_value: finding("達成", 85),
            secondary_value: finding("誠実", 70),
            tertiary_value: finding("自由", 100),
            analysis: String::new(),
        };
        assert!(analysis.validate().is_ok());

        analysis.secondary_value.confidence = 150;
        let err = analysis.validate().unwrap_err();
        assert!(err.contains("誠実"));
    }
}

//! Risk models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Impact value used when the completion output carries no parsable
/// "Impact Level" line.
pub const UNKNOWN_IMPACT: &str = "Unknown";

/// A registered risk with its AI-generated mitigation write-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
    pub likelihood: String,
    pub impact: String,
    pub description: String,
    pub mitigation: String,
    pub created_at: DateTime<Utc>,
}

impl Risk {
    pub fn new(
        name: &str,
        domain: &str,
        likelihood: &str,
        impact: &str,
        description: &str,
        mitigation: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            domain: domain.to_string(),
            likelihood: likelihood.to_string(),
            impact: impact.to_string(),
            description: description.to_string(),
            mitigation: mitigation.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Query parameters for risk creation
#[derive(Debug, Deserialize)]
pub struct CreateRiskParams {
    pub name: String,
    pub domain: String,
    pub likelihood: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreateRiskResponse {
    pub message: String,
    pub risk: Risk,
}

/// Query parameters for the mitigation endpoint
#[derive(Debug, Deserialize)]
pub struct MitigationParams {
    pub risk_name: String,
    pub impact: String,
    pub likelihood: String,
}

#[derive(Debug, Serialize)]
pub struct MitigationResponse {
    pub risk: String,
    pub mitigation: String,
}

/// Extract the impact label from a mitigation write-up.
///
/// The prompt asks the model to start its output with
/// `**Impact Level**: [High/Medium/Low]`. The scan takes the first line
/// containing "Impact Level" and reads the text after the last colon on
/// that line. Anything else falls back to [`UNKNOWN_IMPACT`].
pub fn extract_impact_level(output: &str) -> String {
    let impact_line = output
        .lines()
        .find(|line| line.contains("Impact Level"))
        .unwrap_or("");

    match impact_line.rsplit_once(':') {
        Some((_, value)) => value.trim().to_string(),
        None => UNKNOWN_IMPACT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_impact_from_markdown_header_line() {
        let output = "**Impact Level**: High\n\nShort-Term Mitigation Plan\n...";
        assert_eq!(extract_impact_level(output), "High");
    }

    #[test]
    fn extracts_impact_when_line_is_not_first() {
        let output = "Summary of the risk.\nImpact Level: Medium\nDetails follow.";
        assert_eq!(extract_impact_level(output), "Medium");
    }

    #[test]
    fn first_matching_line_wins() {
        let output = "**Impact Level**: Low\nRevised Impact Level: High";
        assert_eq!(extract_impact_level(output), "Low");
    }

    #[test]
    fn takes_text_after_the_last_colon() {
        let output = "Note: **Impact Level**: High";
        assert_eq!(extract_impact_level(output), "High");
    }

    #[test]
    fn falls_back_to_unknown_without_matching_line() {
        let output = "The model declined to rate this risk.";
        assert_eq!(extract_impact_level(output), UNKNOWN_IMPACT);
    }

    #[test]
    fn falls_back_to_unknown_when_line_has_no_colon() {
        let output = "Impact Level is High";
        assert_eq!(extract_impact_level(output), UNKNOWN_IMPACT);
    }

    #[test]
    fn falls_back_to_unknown_on_empty_output() {
        assert_eq!(extract_impact_level(""), UNKNOWN_IMPACT);
    }
}

//! Prompt templates
//!
//! Fixed templates for the four completion-backed operations. Each
//! operation pairs a system preamble with a formatted user prompt.

/// System preamble for policy drafting.
pub const POLICY_SYSTEM: &str = "You are a GRC policy drafting expert.";

/// System preamble for risk analysis.
pub const RISK_SYSTEM: &str = "You are a GRC and enterprise risk management expert.";

/// System preamble for standalone mitigation requests.
pub const MITIGATION_SYSTEM: &str = "You are a GRC risk mitigation expert.";

/// System preamble for the chatbot.
pub const CHAT_SYSTEM: &str =
    "You are a helpful AI assistant for GRC (Governance, Risk, Compliance).";

/// User prompt asking for a full policy draft in the given category.
///
/// `explanation` is the caller's topic plus any additional notes,
/// already assembled by the handler.
pub fn policy_prompt(category: &str, explanation: &str) -> String {
    format!(
        "You are a policy analyst with nine years of experience specializing in the '{category}' domain. \
         A user has provided the following explanation for a new company policy:\n\n\
         \"{explanation}\"\n\n\
         Based on this, draft a comprehensive company policy structured as follows:\n\
         - Begin with 3 to 4 clear bullet points highlighting the key elements of the policy.\n\
         - Under each bullet point, provide a detailed description.\n\
         - Finally, include a comprehensive overview summarizing the entire policy.\n\n\
         The policy should include purpose, scope, responsibilities, and key requirements relevant to the domain and user explanation."
    )
}

/// User prompt asking for a structured risk analysis whose first output
/// line carries the impact level.
pub fn risk_prompt(name: &str, domain: &str, likelihood: &str, description: &str) -> String {
    format!(
        "\nYou are a senior enterprise risk analyst.\n\n\
         Risk Details:\n\n\
         * Name: {name}\n\
         * Domain: {domain}\n\
         * Likelihood: {likelihood}\n\
         * Description: {description}\n\n\
         Tasks:\n\n\
         1. Based on domain experience and likelihood, determine the **Impact Level** (High, Medium, or Low).\n\
         2. Then provide a structured mitigation plan including:\n\n\
         \x20  * Short-Term Mitigation Plan\n\
         \x20  * Long-Term Mitigation Strategy\n\
         \x20  * Financial Impact (cost of mitigation vs. cost of ignoring)\n\
         \x20  * Steps to Avoid This Risk in the Future\n\
         \x20  * Consequences If This Risk Is Not Addressed\n\
         \x20  * Relevant Stakeholders\n\
         \x20  * Legal or Regulatory Considerations (if applicable)\n\n\
         Output must start with:\n\
         **Impact Level**: [High/Medium/Low]\n\n\
         Then provide the mitigation sections using markdown.\n"
    )
}

/// One-line prompt asking for a mitigation plan for a named risk.
pub fn mitigation_prompt(risk_name: &str, impact: &str, likelihood: &str) -> String {
    format!(
        "Suggest risk mitigation plan for a risk named '{risk_name}' with {impact} impact and {likelihood} likelihood."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_prompt_embeds_category_and_explanation() {
        let prompt = policy_prompt("Data Privacy", "Topic: retention limits.");
        assert!(prompt.contains("'Data Privacy' domain"));
        assert!(prompt.contains("\"Topic: retention limits.\""));
    }

    #[test]
    fn risk_prompt_requests_impact_level_header() {
        let prompt = risk_prompt("Phishing", "IT", "High", "Credential theft campaigns");
        assert!(prompt.contains("* Name: Phishing"));
        assert!(prompt.contains("**Impact Level**: [High/Medium/Low]"));
    }

    #[test]
    fn mitigation_prompt_is_single_line() {
        let prompt = mitigation_prompt("Phishing", "High", "Medium");
        assert!(!prompt.contains('\n'));
        assert!(prompt.contains("'Phishing'"));
    }
}

//! Policy models

use serde::{Deserialize, Serialize};

/// Query parameters for policy creation
#[derive(Debug, Deserialize)]
pub struct CreatePolicyParams {
    /// Policy category
    pub category: String,
    /// Policy topic
    pub topic: String,
    /// Optional additional notes
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatePolicyResponse {
    pub message: String,
    pub policy: String,
    pub category: String,
}

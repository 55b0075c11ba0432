//! Chat models

use serde::{Deserialize, Serialize};

/// Query parameters for the chatbot endpoint
#[derive(Debug, Deserialize)]
pub struct ChatParams {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub query: String,
    pub response: String,
}

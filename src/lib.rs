//! GRC Tool API Server
//!
//! AI-assisted Governance, Risk and Compliance backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      GRC TOOL API                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────┐  ┌───────────────────────┐ │
//! │  │  API      │  │  In-Memory  │  │  Completion Client    │ │
//! │  │  Gateway  │  │  Store      │  │  (OpenAI-compatible)  │ │
//! │  │  (Axum)   │  │  (RwLock)   │  │                       │ │
//! │  └─────┬─────┘  └──────┬──────┘  └───────────┬───────────┘ │
//! │        └───────────────┼──────────────────────┘             │
//! │                        ▼                                    │
//! │                ┌──────────────┐                             │
//! │                │  LLM Backend │                             │
//! │                └──────────────┘                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<store::Store>,
    pub llm: Arc<dyn llm::CompletionClient>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let policy_routes = Router::new()
        .route("/policies", get(handlers::policies::list))
        .route("/policies", post(handlers::policies::create));

    let risk_routes = Router::new()
        .route("/risks", get(handlers::risks::list))
        .route("/risks", post(handlers::risks::create))
        .route("/risks/mitigation", post(handlers::risks::mitigation));

    Router::new()
        .route("/", get(handlers::health::root))
        .merge(policy_routes)
        .merge(risk_routes)
        .route("/chat", post(handlers::chat::chat))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

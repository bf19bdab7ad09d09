//! HTTP API
//!
//! `POST /api/audit` runs one audit, `GET /api/stats` reads the registry,
//! `GET /health` answers liveness probes.

mod error;
mod handlers;

pub use error::{ErrorBody, GENERIC_FAILURE};
pub use handlers::{AuditResponse, HealthResponse};

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::blockchain::RegistryReader;
use crate::core::AuditOrchestrator;

/// Shared, immutable service handles
pub struct AppState {
    pub orchestrator: AuditOrchestrator,
    pub registry: Option<RegistryReader>,
}

impl AppState {
    pub fn new(orchestrator: AuditOrchestrator) -> Self {
        Self {
            orchestrator,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: RegistryReader) -> Self {
        self.registry = Some(registry);
        self
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/audit", post(handlers::submit_audit))
        .route("/api/stats", get(handlers::registry_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

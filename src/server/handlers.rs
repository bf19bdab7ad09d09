use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use crate::blockchain::RegistrySnapshot;
use crate::models::{AuditRequest, AuditResult};
use crate::server::AppState;
use crate::utils::{AuditError, Result};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub message: String,
    pub summary: String,
    #[serde(rename = "fullReportIPFS")]
    pub full_report_ipfs: String,
    pub next_step: String,
    pub content_hash: String,
    pub requested_at: String,
}

impl From<AuditResult> for AuditResponse {
    fn from(result: AuditResult) -> Self {
        Self {
            message: "Audit completed successfully.".to_string(),
            summary: result.summary,
            full_report_ipfs: result.report_locator,
            next_step: "User may now view report or save on-chain.".to_string(),
            content_hash: result.fingerprint.to_hex(),
            requested_at: result.requested_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn submit_audit(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<AuditResponse>> {
    let Json(request) = payload
        .map_err(|e| AuditError::Validation(format!("Invalid request body: {}", e.body_text())))?;

    let result = state.orchestrator.run(request).await?;

    Ok(Json(result.into()))
}

pub async fn registry_stats(State(state): State<Arc<AppState>>) -> Result<Json<RegistrySnapshot>> {
    let registry = state
        .registry
        .as_ref()
        .ok_or(AuditError::NotConfigured("Audit registry"))?;

    Ok(Json(registry.snapshot().await?))
}

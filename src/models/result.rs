use super::fingerprint::ContentFingerprint;
use chrono::{DateTime, Utc};
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Outcome of one successful orchestration. Built once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub summary: String,
    pub report_locator: String,
    pub requested_at: DateTime<Utc>,
    pub fingerprint: ContentFingerprint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Address>,
}

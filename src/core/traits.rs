use async_trait::async_trait;
use ethers::types::Address;
use crate::models::AuditPrompt;
use crate::utils::Result;

/// Looks up verified contract source by address
#[async_trait]
pub trait SourceProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the contract has no verified source.
    async fn fetch_source(&self, address: Address) -> Result<Option<String>>;
}

/// Turns an audit prompt into a free-form report
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &AuditPrompt) -> Result<String>;
}

/// Persists a full report and hands back its retrieval URL
#[async_trait]
pub trait ReportStore: Send + Sync {
    fn name(&self) -> &'static str;

    async fn put_report(&self, report: &str) -> Result<String>;
}

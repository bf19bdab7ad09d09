use std::sync::Arc;
use chrono::Utc;
use ethers::types::Address;
use crate::core::summary::summarize;
use crate::core::{ReportGenerator, ReportStore, SourceProvider};
use crate::models::{AuditPrompt, AuditRequest, AuditResult, ContentFingerprint};
use crate::utils::{parse_checked, AuditError, Result};

/// Default upper bound on source handed to the model.
pub const DEFAULT_MAX_SOURCE_CHARS: usize = 100_000;

/// Runs one audit: resolve source, generate, summarize, store.
pub struct AuditOrchestrator {
    explorer: Arc<dyn SourceProvider>,
    generator: Arc<dyn ReportGenerator>,
    store: Arc<dyn ReportStore>,
    max_source_chars: usize,
}

impl AuditOrchestrator {
    pub fn new(
        explorer: Arc<dyn SourceProvider>,
        generator: Arc<dyn ReportGenerator>,
        store: Arc<dyn ReportStore>,
    ) -> Self {
        Self {
            explorer,
            generator,
            store,
            max_source_chars: DEFAULT_MAX_SOURCE_CHARS,
        }
    }

    pub fn with_max_source_chars(mut self, max_source_chars: usize) -> Self {
        self.max_source_chars = max_source_chars;
        self
    }

    pub async fn run(&self, request: AuditRequest) -> Result<AuditResult> {
        let requested_at = Utc::now();

        let requester = request
            .requester()
            .map(|r| parse_address(r, "Invalid user address."))
            .transpose()?;

        let (source, fingerprint) = match (request.source_code(), request.contract_address()) {
            (None, None) => {
                return Err(AuditError::Validation(
                    "Please provide either a contract address or contract source code.".into(),
                ));
            }
            (Some(code), address) => {
                // The address only feeds the fingerprint when code is supplied.
                let fingerprint = match address.map(parse_checked) {
                    Some(Some(address)) => ContentFingerprint::of_address(address),
                    Some(None) => {
                        tracing::warn!("Ignoring malformed contract address alongside source");
                        ContentFingerprint::of_source(code)
                    }
                    None => ContentFingerprint::of_source(code),
                };
                (code.to_string(), fingerprint)
            }
            (None, Some(address)) => {
                let address = parse_address(address, "Invalid contract address.")?;
                let source = self.resolve_source(address).await?;
                (source, ContentFingerprint::of_address(address))
            }
        };

        let source_chars = source.chars().count();
        if source_chars > self.max_source_chars {
            return Err(AuditError::Validation(format!(
                "Contract source is {} characters; the limit is {}.",
                source_chars, self.max_source_chars
            )));
        }

        tracing::info!(
            "Generating audit with '{}' for {} characters of source",
            self.generator.name(),
            source_chars
        );

        let report = self
            .generator
            .generate(&AuditPrompt::for_source(&source))
            .await
            .map_err(AuditError::into_generation)?;

        // Generators other than the chat client may hand back blank text.
        if report.trim().is_empty() {
            return Err(AuditError::Generation("model returned an empty report".into()));
        }

        let summary = summarize(&report);

        let report_locator = self
            .store
            .put_report(&report)
            .await
            .map_err(AuditError::into_storage)?;

        tracing::info!("Audit {} stored at {}", fingerprint, report_locator);

        Ok(AuditResult {
            summary,
            report_locator,
            requested_at,
            fingerprint,
            requester,
        })
    }

    async fn resolve_source(&self, address: Address) -> Result<String> {
        tracing::debug!("Fetching verified source for {:?} via '{}'", address, self.explorer.name());

        let source = self
            .explorer
            .fetch_source(address)
            .await
            .map_err(AuditError::into_explorer)?;

        source.ok_or_else(|| AuditError::SourceNotFound(format!("{:?}", address)))
    }
}

fn parse_address(value: &str, message: &str) -> Result<Address> {
    parse_checked(value).ok_or_else(|| AuditError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Unreachable(AtomicUsize);

    #[async_trait]
    impl SourceProvider for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        async fn fetch_source(&self, _address: Address) -> Result<Option<String>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AuditError::Config("should not be called".into()))
        }
    }

    #[async_trait]
    impl ReportGenerator for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        async fn generate(&self, _prompt: &AuditPrompt) -> Result<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AuditError::Config("should not be called".into()))
        }
    }

    #[async_trait]
    impl ReportStore for Unreachable {
        fn name(&self) -> &'static str {
            "unreachable"
        }

        async fn put_report(&self, _report: &str) -> Result<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(AuditError::Config("should not be called".into()))
        }
    }

    fn unreachable_orchestrator() -> (AuditOrchestrator, Arc<Unreachable>) {
        let calls = Arc::new(Unreachable(AtomicUsize::new(0)));
        let orchestrator = AuditOrchestrator::new(calls.clone(), calls.clone(), calls.clone());
        (orchestrator, calls)
    }

    #[tokio::test]
    async fn test_empty_request_rejected_without_calls() {
        let (orchestrator, calls) = unreachable_orchestrator();

        let err = orchestrator.run(AuditRequest::default()).await.unwrap_err();

        assert!(matches!(err, AuditError::Validation(_)));
        assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_address_rejected_without_calls() {
        let (orchestrator, calls) = unreachable_orchestrator();

        let err = orchestrator
            .run(AuditRequest::from_address("0xnot-an-address"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Validation(ref m) if m == "Invalid contract address."));
        assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bad_checksum_address_rejected_without_calls() {
        let (orchestrator, calls) = unreachable_orchestrator();

        let err = orchestrator
            .run(AuditRequest::from_address("0x82AD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Validation(ref m) if m == "Invalid contract address."));
        assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_requester_rejected() {
        let (orchestrator, calls) = unreachable_orchestrator();

        let err = orchestrator
            .run(AuditRequest::from_source("contract X {}").with_requester("bob"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Validation(_)));
        assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_source_rejected() {
        let (orchestrator, calls) = unreachable_orchestrator();
        let orchestrator = orchestrator.with_max_source_chars(10);

        let err = orchestrator
            .run(AuditRequest::from_source("contract TooLong {}"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Validation(_)));
        assert_eq!(calls.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generator_failure_is_generation_error() {
        let (orchestrator, calls) = unreachable_orchestrator();

        let err = orchestrator
            .run(AuditRequest::from_source("contract X {}"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Generation(_)));
        assert_eq!(calls.0.load(Ordering::SeqCst), 1);
    }
}

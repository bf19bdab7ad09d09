#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use dream_audit::storage::locator_from_response;
use dream_audit::{AuditError, AuditOrchestrator, AuditPrompt, ReportGenerator, ReportStore, Result, SourceProvider};
use ethers::types::Address;

pub const GATEWAY: &str = "https://ipfs.filebase.io/ipfs";
pub const SOURCE: &str = "pragma solidity ^0.8.0; contract X {}";
pub const CONTRACT: &str = "0xABC0000000000000000000000000000000000123";

/// Explorer double that records every lookup
pub struct FakeExplorer {
    response: std::result::Result<Option<String>, String>,
    pub calls: Mutex<Vec<Address>>,
}

impl FakeExplorer {
    pub fn verified(source: &str) -> Arc<Self> {
        Arc::new(Self { response: Ok(Some(source.to_string())), calls: Mutex::new(Vec::new()) })
    }

    pub fn unverified() -> Arc<Self> {
        Arc::new(Self { response: Ok(None), calls: Mutex::new(Vec::new()) })
    }

    pub fn down(reason: &str) -> Arc<Self> {
        Arc::new(Self { response: Err(reason.to_string()), calls: Mutex::new(Vec::new()) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SourceProvider for FakeExplorer {
    fn name(&self) -> &'static str {
        "fake-explorer"
    }

    async fn fetch_source(&self, address: Address) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(address);
        self.response
            .clone()
            .map_err(AuditError::ExplorerUnavailable)
    }
}

/// Generator double returning a canned report
pub struct FakeGenerator {
    report: std::result::Result<String, String>,
    pub prompts: Mutex<Vec<AuditPrompt>>,
}

impl FakeGenerator {
    pub fn returning(report: impl Into<String>) -> Arc<Self> {
        Arc::new(Self { report: Ok(report.into()), prompts: Mutex::new(Vec::new()) })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self { report: Err(reason.to_string()), prompts: Mutex::new(Vec::new()) })
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportGenerator for FakeGenerator {
    fn name(&self) -> &'static str {
        "fake-generator"
    }

    async fn generate(&self, prompt: &AuditPrompt) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.report.clone().map_err(AuditError::Generation)
    }
}

/// Store double that answers with canned response headers and goes through
/// the real locator derivation
pub struct FakeStore {
    status: u16,
    headers: HashMap<String, String>,
    pub uploads: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn with_cid(cid: &str) -> Arc<Self> {
        let headers = HashMap::from([("x-amz-meta-cid".to_string(), cid.to_string())]);
        Arc::new(Self { status: 200, headers, uploads: Mutex::new(Vec::new()) })
    }

    pub fn without_cid() -> Arc<Self> {
        let headers = HashMap::from([("etag".to_string(), "\"d41d8cd9\"".to_string())]);
        Arc::new(Self { status: 200, headers, uploads: Mutex::new(Vec::new()) })
    }

    pub fn call_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportStore for FakeStore {
    fn name(&self) -> &'static str {
        "fake-store"
    }

    async fn put_report(&self, report: &str) -> Result<String> {
        self.uploads.lock().unwrap().push(report.to_string());
        locator_from_response(self.status, &self.headers, GATEWAY)
    }
}

pub fn orchestrator(
    explorer: &Arc<FakeExplorer>,
    generator: &Arc<FakeGenerator>,
    store: &Arc<FakeStore>,
) -> AuditOrchestrator {
    AuditOrchestrator::new(explorer.clone(), generator.clone(), store.clone())
}

/// A deterministic report of `len` ASCII characters
pub fn report_of_len(len: usize) -> String {
    (0..len).map(|i| char::from(b'A' + (i % 26) as u8)).collect()
}

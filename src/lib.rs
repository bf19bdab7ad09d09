pub mod contracts;
pub mod storage;
pub mod verification;

pub mod config;
pub mod core;
pub mod models;
pub mod auditors;
pub mod blockchain;
pub mod server;
pub mod utils;

pub use core::{AuditOrchestrator, ReportGenerator, ReportStore, SourceProvider};
pub use models::{AuditRequest, AuditResult, AuditPrompt, ContentFingerprint, OnChainAuditRecord};
pub use utils::{AuditError, Result};

pub mod request;
pub mod result;
pub mod prompt;
pub mod fingerprint;

pub use request::AuditRequest;
pub use result::AuditResult;
pub use prompt::AuditPrompt;
pub use fingerprint::{ContentFingerprint, OnChainAuditRecord};

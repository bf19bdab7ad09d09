pub mod traits;
pub mod summary;
pub mod orchestrator;

pub use traits::{ReportGenerator, ReportStore, SourceProvider};
pub use summary::{summarize, SUMMARY_CHARS, TRUNCATION_MARKER};
pub use orchestrator::{AuditOrchestrator, DEFAULT_MAX_SOURCE_CHARS};

pub mod address;
pub mod errors;

pub use address::parse_checked;
pub use errors::{AuditError, Result};

//! Pure helpers for naming uploaded reports and turning the store's
//! response metadata into a retrieval URL.

use std::collections::HashMap;
use crate::utils::{AuditError, Result};

/// Response header carrying the IPFS CID of an uploaded object.
pub const CID_HEADER: &str = "x-amz-meta-cid";

/// Object key for a report uploaded at `unix_millis`.
pub fn object_key(prefix: &str, unix_millis: i64) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("Audit-{}.txt", unix_millis)
    } else {
        format!("{}/Audit-{}.txt", prefix, unix_millis)
    }
}

/// Derive `<gateway>/<cid>` from a PUT response.
///
/// Anything but a 200 carrying a non-empty CID header is a storage failure.
pub fn locator_from_response(
    status: u16,
    headers: &HashMap<String, String>,
    gateway: &str,
) -> Result<String> {
    if status != 200 {
        return Err(AuditError::Storage(format!("upload returned status {}", status)));
    }

    let cid = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(CID_HEADER))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AuditError::Storage("upload succeeded but CID header is missing".into()))?;

    Ok(format!("{}/{}", gateway.trim_end_matches('/'), cid))
}

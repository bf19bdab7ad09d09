use serde::{Deserialize, Serialize};

/// Inbound audit submission. Either the source or an address must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRequest {
    #[serde(default, rename = "code")]
    pub source_code: Option<String>,
    #[serde(default, rename = "contractAddress")]
    pub contract_address: Option<String>,
    #[serde(default, rename = "userAddress")]
    pub requester: Option<String>,
}

impl AuditRequest {
    pub fn from_source(code: impl Into<String>) -> Self {
        Self {
            source_code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn from_address(address: impl Into<String>) -> Self {
        Self {
            contract_address: Some(address.into()),
            ..Self::default()
        }
    }

    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Submitted source, if any. Blank text counts as absent.
    pub fn source_code(&self) -> Option<&str> {
        non_blank(self.source_code.as_deref())
    }

    pub fn contract_address(&self) -> Option<&str> {
        non_blank(self.contract_address.as_deref()).map(str::trim)
    }

    pub fn requester(&self) -> Option<&str> {
        non_blank(self.requester.as_deref()).map(str::trim)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

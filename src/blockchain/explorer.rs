use async_trait::async_trait;
use ethers::types::Address;
use serde::Deserialize;
use crate::config::ExplorerSettings;
use crate::core::SourceProvider;
use crate::utils::{AuditError, Result};

/// Etherscan-style `{status, message, result}` envelope.
#[derive(Debug, Deserialize)]
pub struct ExplorerEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// An array of entries on success, a plain string on API errors.
    #[serde(default)]
    pub result: serde_json::Value,
}

impl ExplorerEnvelope {
    /// `SourceCode` of the first result entry, if present and non-blank.
    pub fn source_code(&self) -> Option<String> {
        self.result
            .as_array()?
            .first()?
            .get("SourceCode")?
            .as_str()
            .filter(|code| !code.trim().is_empty())
            .map(str::to_string)
    }
}

/// Block-explorer client for verified contract source
pub struct ExplorerClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(settings: &ExplorerSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AuditError::Config(format!("explorer HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl SourceProvider for ExplorerClient {
    fn name(&self) -> &'static str {
        "block-explorer"
    }

    async fn fetch_source(&self, address: Address) -> Result<Option<String>> {
        let address = format!("{:?}", address);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("module", "contract"),
                ("action", "getsourcecode"),
                ("address", address.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AuditError::ExplorerUnavailable(e.to_string()))?;

        let envelope: ExplorerEnvelope = response
            .json()
            .await
            .map_err(|e| AuditError::ExplorerUnavailable(format!("malformed response: {}", e)))?;

        let source = envelope.source_code();
        if source.is_none() {
            tracing::info!(
                "No verified source for {} (status: {:?}, message: {:?})",
                address,
                envelope.status,
                envelope.message
            );
        }

        Ok(source)
    }
}

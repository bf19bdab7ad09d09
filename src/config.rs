//! Settings shared by the binaries.
//!
//! Every value can be passed as a flag or read from the environment, so the
//! server runs from a plain `.env`-style deployment without a config file.

use std::time::Duration;
use clap::Args;
use ethers::types::Address;
use crate::utils::{parse_checked, AuditError, Result};

pub const DEFAULT_EXPLORER_URL: &str = "https://shannon-explorer.somnia.network/api";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://s3.filebase.com";
pub const DEFAULT_GATEWAY: &str = "https://ipfs.filebase.io/ipfs";
pub const DEFAULT_RPC_URL: &str = "https://dream-rpc.somnia.network";

#[derive(Args, Debug, Clone)]
pub struct ExplorerSettings {
    /// Etherscan-compatible explorer API
    #[arg(long = "explorer-url", env = "EXPLORER_API_URL", default_value = DEFAULT_EXPLORER_URL)]
    pub api_url: String,

    #[arg(long = "explorer-api-key", env = "EXPLORER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "explorer-timeout-secs", env = "EXPLORER_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct GeneratorSettings {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_URL)]
    pub base_url: String,

    #[arg(long = "model", env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Caps the length of a generated report
    #[arg(long = "max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 2048)]
    pub max_tokens: u32,

    #[arg(long = "openai-timeout-secs", env = "OPENAI_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct StorageSettings {
    #[arg(long = "storage-access-key", env = "FILEBASE_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: String,

    #[arg(long = "storage-secret-key", env = "FILEBASE_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: String,

    #[arg(long = "storage-endpoint", env = "FILEBASE_ENDPOINT", default_value = DEFAULT_STORAGE_ENDPOINT)]
    pub endpoint: String,

    #[arg(long = "storage-region", env = "FILEBASE_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long = "storage-bucket", env = "FILEBASE_BUCKET", default_value = "websitefiles")]
    pub bucket: String,

    #[arg(long = "storage-prefix", env = "FILEBASE_KEY_PREFIX", default_value = "DreamAudit")]
    pub key_prefix: String,

    /// Retrieval URLs are `<gateway>/<cid>`
    #[arg(long = "gateway", env = "IPFS_GATEWAY", default_value = DEFAULT_GATEWAY)]
    pub gateway: String,

    #[arg(long = "storage-timeout-secs", env = "FILEBASE_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ChainSettings {
    #[arg(long = "rpc", env = "SOMNIA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Deployed DreamAudit registry
    #[arg(long = "registry", env = "DREAMAUDIT_ADDRESS")]
    pub registry: Option<String>,
}

impl ExplorerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl GeneratorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl StorageSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ChainSettings {
    pub fn registry_address(&self) -> Result<Option<Address>> {
        self.registry
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(|r| parse_address_arg("registry", r))
            .transpose()
    }
}

/// Parse an address coming from a flag or env var.
pub fn parse_address_arg(name: &str, value: &str) -> Result<Address> {
    parse_checked(value.trim())
        .ok_or_else(|| AuditError::Config(format!("{} is not a valid address: {}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        explorer: ExplorerSettings,
        #[command(flatten)]
        chain: ChainSettings,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();

        assert_eq!(cli.explorer.timeout(), Duration::from_secs(15));
        assert!(cli.explorer.api_url.ends_with("/api"));
        assert_eq!(cli.chain.registry_address().unwrap(), None);
    }

    #[test]
    fn test_registry_address_validated() {
        let cli = TestCli::try_parse_from(["test", "--registry", "0x1234"]).unwrap();
        assert!(matches!(cli.chain.registry_address(), Err(AuditError::Config(_))));

        let cli = TestCli::try_parse_from([
            "test",
            "--registry",
            "0x82aD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc",
        ])
        .unwrap();
        assert!(cli.chain.registry_address().unwrap().is_some());
    }
}

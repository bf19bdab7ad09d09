use ethers::prelude::*;
use std::sync::Arc;
use crate::utils::{Result, AuditError};

/// Provider with a local signing wallet attached
pub type SignerClient = SignerMiddleware<Arc<Provider<Http>>, LocalWallet>;

/// Blockchain RPC client
pub struct BlockchainClient {
    pub provider: Arc<Provider<Http>>,
    chain_id: u64,
}

impl BlockchainClient {
    /// Create a new client
    pub async fn new(rpc_url: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| AuditError::RpcError(
                ProviderError::CustomError(format!("Invalid RPC URL: {}", e))
            ))?;

        let provider = Arc::new(provider);

        let chain_id = provider.get_chainid().await?;

        tracing::info!("Connected to chain ID: {}", chain_id);

        Ok(Self {
            provider,
            chain_id: chain_id.as_u64(),
        })
    }

    /// Attach a signing wallet built from a hex private key
    pub fn signer(&self, private_key: &str) -> Result<Arc<SignerClient>> {
        let wallet: LocalWallet = private_key
            .trim()
            .parse()
            .map_err(|_| AuditError::Config("private key is not a valid secp256k1 key".into()))?;
        let wallet = wallet.with_chain_id(self.chain_id);

        tracing::debug!("Signing as {:?}", wallet.address());

        Ok(Arc::new(SignerMiddleware::new(self.provider.clone(), wallet)))
    }

    /// Native balance of an account
    pub async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self.provider.get_balance(address, None).await?)
    }

    /// Check if address is a contract
    pub async fn is_contract(&self, address: Address) -> Result<bool> {
        let code = self.provider.get_code(address, None).await?;
        Ok(!code.is_empty())
    }

    /// Get chain ID
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get chain name
    pub fn chain_name(&self) -> &'static str {
        chain_name(self.chain_id)
    }
}

pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum Mainnet",
        5031 => "Somnia Mainnet",
        50312 => "Somnia Shannon Testnet",
        31337 => "Hardhat Local",
        _ => "Unknown Chain",
    }
}

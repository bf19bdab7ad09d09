use std::sync::Arc;
use ethers::prelude::*;
use serde::Serialize;
use crate::blockchain::client::SignerClient;
use crate::contracts::DreamAudit;
use crate::models::OnChainAuditRecord;
use crate::utils::{AuditError, Result};

/// Read-side view of the registry configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub total_audits: U256,
    pub fee: U256,
    pub treasury: Address,
    pub system_wallet: Address,
}

/// Read-only access to the registry
pub struct RegistryReader {
    registry: DreamAudit<Provider<Http>>,
}

impl RegistryReader {
    pub fn new(provider: Arc<Provider<Http>>, registry: Address) -> Self {
        Self {
            registry: DreamAudit::new(registry, provider),
        }
    }

    pub async fn snapshot(&self) -> Result<RegistrySnapshot> {
        let total_audits = self.registry.total_audit_count().call().await.map_err(read_error)?;
        let fee = self.registry.fee().call().await.map_err(read_error)?;
        let treasury = self.registry.treasury().call().await.map_err(read_error)?;
        let system_wallet = self.registry.system_wallet().call().await.map_err(read_error)?;

        Ok(RegistrySnapshot {
            total_audits,
            fee,
            treasury,
            system_wallet,
        })
    }
}

/// Writes audit pointers to the registry, paying its fee
pub struct OnChainRecorder {
    registry: Address,
    signer: Option<Arc<SignerClient>>,
}

impl OnChainRecorder {
    pub fn new(registry: Address, signer: Option<Arc<SignerClient>>) -> Self {
        Self { registry, signer }
    }

    /// Submit `storeAudit(contentHash, reportURI)` and wait for the receipt.
    pub async fn record(&self, record: &OnChainAuditRecord) -> Result<TransactionReceipt> {
        let signer = self.signer.clone().ok_or(AuditError::WalletNotConnected)?;
        let registry = DreamAudit::new(self.registry, signer.clone());

        let fee = registry.fee().call().await.map_err(read_error)?;

        tracing::info!(
            "Recording {} -> {} (fee {} wei) from {:?}",
            record.fingerprint,
            record.report_locator,
            fee,
            signer.address()
        );

        let call = registry
            .store_audit(record.fingerprint.as_bytes(), record.report_locator.clone())
            .value(fee);

        let pending = call
            .send()
            .await
            .map_err(|e| AuditError::Transaction(e.to_string()))?;

        let tx_hash = pending.tx_hash();
        tracing::debug!("Submitted {:?}", tx_hash);

        let receipt = pending
            .await
            .map_err(|e| AuditError::Transaction(e.to_string()))?
            .ok_or_else(|| AuditError::Transaction(format!("transaction {:?} was dropped", tx_hash)))?;

        if receipt.status == Some(U64::zero()) {
            return Err(AuditError::Transaction(format!("transaction {:?} reverted", tx_hash)));
        }

        Ok(receipt)
    }
}

fn read_error<M: Middleware>(e: ContractError<M>) -> AuditError {
    AuditError::Transaction(format!("registry read failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentFingerprint;

    #[tokio::test]
    async fn test_record_requires_wallet() {
        let recorder = OnChainRecorder::new(Address::zero(), None);
        let record = OnChainAuditRecord::new(
            ContentFingerprint::of_source("contract X {}"),
            "https://ipfs.filebase.io/ipfs/bafy123",
        );

        let err = recorder.record(&record).await.unwrap_err();
        assert!(matches!(err, AuditError::WalletNotConnected));
    }

    #[test]
    fn test_snapshot_wire_names() {
        let snapshot = RegistrySnapshot {
            total_audits: U256::from(7),
            fee: U256::from(100u64),
            treasury: Address::zero(),
            system_wallet: Address::zero(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("totalAudits").is_some());
        assert!(json.get("systemWallet").is_some());
    }
}

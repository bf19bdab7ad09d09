use std::path::{Path, PathBuf};
use std::sync::Arc;
use ethers::abi::{Abi, Tokenize};
use ethers::prelude::*;
use serde::Deserialize;
use crate::blockchain::client::SignerClient;
use crate::utils::{AuditError, Result};

/// The subset of a Hardhat build artifact needed to deploy a contract
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardhatArtifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl HardhatArtifact {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: HardhatArtifact = serde_json::from_str(&raw)?;

        if artifact.bytecode.is_empty() {
            return Err(AuditError::Deployment(format!(
                "{} has no creation bytecode (abstract contract or interface?)",
                artifact.contract_name
            )));
        }

        Ok(artifact)
    }

    /// Locate `<Name>.json` in a Hardhat `artifacts/` tree.
    ///
    /// Accepts the artifacts root, `artifacts/contracts`, or a flat directory.
    pub fn find(dir: &Path, contract_name: &str) -> Result<PathBuf> {
        let file = format!("{}.json", contract_name);
        let nested = format!("{}.sol", contract_name);

        let candidates = [
            dir.join("contracts").join(&nested).join(&file),
            dir.join(&nested).join(&file),
            dir.join(&file),
        ];

        candidates
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| AuditError::Deployment(format!(
                "artifact for {} not found under {:?}",
                contract_name, dir
            )))
    }
}

/// Deploys compiled contracts with a signing client
pub struct ArtifactDeployer {
    client: Arc<SignerClient>,
}

impl ArtifactDeployer {
    pub fn new(client: Arc<SignerClient>) -> Self {
        Self { client }
    }

    pub fn deployer_address(&self) -> Address {
        self.client.address()
    }

    /// Deploy an artifact and wait until it is mined; returns its address.
    pub async fn deploy<T: Tokenize>(&self, artifact: &HardhatArtifact, args: T) -> Result<Address> {
        tracing::info!("Deploying {}...", artifact.contract_name);

        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        );

        let contract = factory
            .deploy(args)
            .map_err(|e| AuditError::Deployment(format!("{}: {}", artifact.contract_name, e)))?
            .send()
            .await
            .map_err(|e| AuditError::Deployment(format!("{}: {}", artifact.contract_name, e)))?;

        let address = contract.address();
        tracing::info!("{} deployed at {:?}", artifact.contract_name, address);

        Ok(address)
    }
}

//! Post-deployment configuration check
//!
//! Reads the freshly deployed registry and treasury back from the chain and
//! compares them with what the deployment was asked to produce.

use std::sync::Arc;
use ethers::prelude::*;
use crate::contracts::{DreamAudit, Treasury};
use crate::utils::{AuditError, Result};

/// What the deployment was asked to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    pub system_wallet: Address,
    pub treasury: Address,
    pub fee: U256,
}

/// What the chain reports after deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedConfiguration {
    pub registry_system_wallet: Address,
    pub registry_treasury: Address,
    pub registry_fee: U256,
    pub treasury_owner: Address,
}

/// One field that differs from the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: String,
    pub observed: String,
}

/// Outcome of the configuration check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationVerdict {
    /// Every read-back value matches the plan
    Matches,

    /// At least one value differs
    Mismatched(Vec<Mismatch>),
}

impl ConfigurationVerdict {
    pub fn is_match(&self) -> bool {
        matches!(self, ConfigurationVerdict::Matches)
    }
}

impl DeployedConfiguration {
    pub fn check(&self, plan: &DeploymentPlan) -> ConfigurationVerdict {
        let mut mismatches = Vec::new();

        let mut compare = |field: &'static str, expected: String, observed: String| {
            if expected != observed {
                mismatches.push(Mismatch { field, expected, observed });
            }
        };

        compare(
            "DreamAudit.systemWallet",
            format!("{:?}", plan.system_wallet),
            format!("{:?}", self.registry_system_wallet),
        );
        compare(
            "DreamAudit.treasury",
            format!("{:?}", plan.treasury),
            format!("{:?}", self.registry_treasury),
        );
        compare("DreamAudit.fee", plan.fee.to_string(), self.registry_fee.to_string());
        compare(
            "Treasury.owner",
            format!("{:?}", plan.system_wallet),
            format!("{:?}", self.treasury_owner),
        );

        if mismatches.is_empty() {
            ConfigurationVerdict::Matches
        } else {
            ConfigurationVerdict::Mismatched(mismatches)
        }
    }
}

/// Reads deployed configuration back from the chain
pub struct DeploymentVerifier<M> {
    client: Arc<M>,
}

impl<M: Middleware + 'static> DeploymentVerifier<M> {
    pub fn new(client: Arc<M>) -> Self {
        Self { client }
    }

    pub async fn read(&self, registry: Address, treasury: Address) -> Result<DeployedConfiguration> {
        tracing::info!("🔍 Verifying on-chain configuration");

        let registry = DreamAudit::new(registry, self.client.clone());
        let treasury = Treasury::new(treasury, self.client.clone());

        Ok(DeployedConfiguration {
            registry_system_wallet: registry.system_wallet().call().await.map_err(read_error)?,
            registry_treasury: registry.treasury().call().await.map_err(read_error)?,
            registry_fee: registry.fee().call().await.map_err(read_error)?,
            treasury_owner: treasury.owner().call().await.map_err(read_error)?,
        })
    }
}

fn read_error<M: Middleware>(e: ContractError<M>) -> AuditError {
    AuditError::Deployment(format!("configuration read failed: {}", e))
}

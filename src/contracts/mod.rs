//! Contract interfaces for the audit registry and its fee treasury
//!
//! Only the call sites used by this crate are bound; the contracts themselves
//! are compiled and deployed from Hardhat artifacts.
pub mod dream_audit;
pub mod treasury;
pub use dream_audit::DreamAudit;
pub use treasury::Treasury;
use ethers::types::{Address, U256};
/// Deployment defaults
pub mod defaults {
    use super::{Address, U256};
    use once_cell::sync::Lazy;
    use std::str::FromStr;

    /// Wallet that owns the treasury and administers the registry
    pub const SYSTEM_WALLET: &str = "0x82aD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc";

    /// Fee per stored audit: 0.1 native token in wei
    pub const AUDIT_FEE_WEI: u128 = 100_000_000_000_000_000;

    static SYSTEM_WALLET_ADDRESS: Lazy<Address> = Lazy::new(|| {
        Address::from_str(SYSTEM_WALLET).expect("Invalid SYSTEM_WALLET address")
    });

    pub fn system_wallet() -> Address {
        *SYSTEM_WALLET_ADDRESS
    }

    pub fn audit_fee() -> U256 {
        U256::from(AUDIT_FEE_WEI)
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            format!("{:?}", defaults::system_wallet()),
            "0x82ad97bef0b7e17b1d30f56e592fc819e1eedafc"
        );
        assert_eq!(defaults::audit_fee(), ethers::utils::parse_ether("0.1").unwrap());
    }
}

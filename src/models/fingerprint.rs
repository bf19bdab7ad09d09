use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// keccak256 over the UTF-8 bytes of the audited subject.
///
/// A known contract address is hashed as its lowercase `0x` hex string,
/// anything else as the raw source text exactly as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFingerprint(pub H256);

impl ContentFingerprint {
    pub fn of_address(address: Address) -> Self {
        Self::of_text(&format!("{:?}", address))
    }

    pub fn of_source(source: &str) -> Self {
        Self::of_text(source)
    }

    fn of_text(text: &str) -> Self {
        let hash = Keccak256::digest(text.as_bytes());
        Self(H256::from_slice(&hash))
    }

    pub fn as_bytes(&self) -> [u8; 32] {
        self.0.to_fixed_bytes()
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }
}

impl std::fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Pointer written to the registry contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnChainAuditRecord {
    pub fingerprint: ContentFingerprint,
    pub report_locator: String,
}

impl OnChainAuditRecord {
    pub fn new(fingerprint: ContentFingerprint, report_locator: impl Into<String>) -> Self {
        Self {
            fingerprint,
            report_locator: report_locator.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_matches_ethers_keccak() {
        let source = "pragma solidity ^0.8.0; contract X {}";
        let expected = ethers::utils::keccak256(source.as_bytes());
        assert_eq!(ContentFingerprint::of_source(source).as_bytes(), expected);
    }

    #[test]
    fn test_address_is_case_insensitive() {
        let checksummed = Address::from_str("0x82aD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc").unwrap();
        let lower = Address::from_str("0x82ad97bef0b7e17b1d30f56e592fc819e1eedafc").unwrap();

        assert_eq!(
            ContentFingerprint::of_address(checksummed),
            ContentFingerprint::of_address(lower)
        );

        let expected = ethers::utils::keccak256("0x82ad97bef0b7e17b1d30f56e592fc819e1eedafc".as_bytes());
        assert_eq!(ContentFingerprint::of_address(lower).as_bytes(), expected);
    }

    #[test]
    fn test_hex_rendering() {
        let hex = ContentFingerprint::of_source("").to_hex();
        assert_eq!(hex.len(), 66);
        // keccak256 of the empty string
        assert_eq!(
            hex,
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}

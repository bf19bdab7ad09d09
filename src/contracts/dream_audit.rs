//! DreamAudit registry interface
//! Stores (content hash, report URI) pairs for a fixed fee
use ethers::prelude::*;

abigen!(
    DreamAudit,
    r#"[
        function storeAudit(bytes32 contentHash, string reportURI) external payable
        function fee() external view returns (uint256)
        function treasury() external view returns (address)
        function systemWallet() external view returns (address)
        function totalAuditCount() external view returns (uint256)
    ]"#,
);

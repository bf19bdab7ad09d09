use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{0}")]
    Validation(String),

    #[error("Verified source code not found for address {0}")]
    SourceNotFound(String),

    #[error("Explorer unavailable: {0}")]
    ExplorerUnavailable(String),

    #[error("Report generation failed: {0}")]
    Generation(String),

    #[error("Report storage failed: {0}")]
    Storage(String),

    #[error("No signing wallet connected")]
    WalletNotConnected,

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("RPC error: {0}")]
    RpcError(#[from] ethers::providers::ProviderError),

    #[error("Deployment failed: {0}")]
    Deployment(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AuditError {
    /// Explorer-side failures mean the user has to paste the source instead.
    pub fn code_required(&self) -> bool {
        matches!(
            self,
            AuditError::SourceNotFound(_) | AuditError::ExplorerUnavailable(_)
        )
    }

    /// Re-tag a failure coming out of the generator seam.
    pub(crate) fn into_generation(self) -> Self {
        match self {
            AuditError::Generation(_) => self,
            other => AuditError::Generation(other.to_string()),
        }
    }

    /// Re-tag a failure coming out of the storage seam.
    pub(crate) fn into_storage(self) -> Self {
        match self {
            AuditError::Storage(_) => self,
            other => AuditError::Storage(other.to_string()),
        }
    }

    /// Re-tag a failure coming out of the explorer seam. A missing source
    /// stays distinct from an unreachable explorer.
    pub(crate) fn into_explorer(self) -> Self {
        match self {
            AuditError::SourceNotFound(_) | AuditError::ExplorerUnavailable(_) => self,
            other => AuditError::ExplorerUnavailable(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

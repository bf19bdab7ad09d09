pub mod client;
pub mod explorer;
pub mod recorder;
pub mod deployer;

pub use client::{BlockchainClient, SignerClient};
pub use explorer::ExplorerClient;
pub use recorder::{OnChainRecorder, RegistryReader, RegistrySnapshot};
pub use deployer::{ArtifactDeployer, HardhatArtifact};

use std::path::PathBuf;
use clap::{ArgGroup, Parser};
use dream_audit::blockchain::{BlockchainClient, OnChainRecorder};
use dream_audit::config::{parse_address_arg, DEFAULT_RPC_URL};
use dream_audit::{AuditError, ContentFingerprint, OnChainAuditRecord, Result};

/// Save an audit report pointer to the DreamAudit registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("subject").required(true).args(["address", "code_file"])))]
struct Args {
    /// Retrieval URL returned by the audit API
    #[arg(short, long)]
    locator: String,

    /// Audited contract address
    #[arg(short, long)]
    address: Option<String>,

    /// Audited Solidity source, hashed exactly as submitted
    #[arg(short, long)]
    code_file: Option<PathBuf>,

    /// DreamAudit registry address
    #[arg(long, env = "DREAMAUDIT_ADDRESS")]
    registry: String,

    /// RPC URL
    #[arg(short, long, env = "SOMNIA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc: String,

    /// Signing key; without it there is no wallet to pay the fee
    #[arg(long, env = "SOMNIA_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Setup logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("dream_audit=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("dream_audit=info")
            .init();
    }

    match run(&args).await {
        Ok(()) => std::process::exit(0),
        Err(AuditError::WalletNotConnected) => {
            eprintln!("\n❌ Connect a wallet (set SOMNIA_PRIVATE_KEY) to save the audit on-chain\n");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\n❌ Failed to save on-chain: {}\n", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let fingerprint = match (&args.address, &args.code_file) {
        (Some(address), _) => ContentFingerprint::of_address(parse_address_arg("contract address", address)?),
        (None, Some(path)) => ContentFingerprint::of_source(&std::fs::read_to_string(path)?),
        (None, None) => {
            return Err(AuditError::Validation("provide --address or --code-file".into()));
        }
    };

    let registry = parse_address_arg("registry", &args.registry)?;
    let record = OnChainAuditRecord::new(fingerprint, args.locator.clone());

    println!("\n📜 Content hash: {}", record.fingerprint);
    println!("🔗 Report:       {}", record.report_locator);

    let private_key = args
        .private_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(AuditError::WalletNotConnected)?;

    let client = BlockchainClient::new(&args.rpc).await?;
    println!("✅ Connected to {}", client.chain_name());

    if !client.is_contract(registry).await? {
        return Err(AuditError::Config(format!("no contract deployed at registry {:?}", registry)));
    }

    let recorder = OnChainRecorder::new(registry, Some(client.signer(private_key)?));
    let receipt = recorder.record(&record).await?;

    println!("\n✅ Audit metadata saved on-chain");
    println!("   Transaction: {:?}", receipt.transaction_hash);
    if let Some(block) = receipt.block_number {
        println!("   Block:       {}", block);
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_fails_before_connecting() {
        let args = Args {
            locator: "https://ipfs.filebase.io/ipfs/bafy123".into(),
            address: Some("0x82aD97bEf0b7E17b1D30f56e592Fc819E1eeDAfc".into()),
            code_file: None,
            registry: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            // Nothing listens here; reaching the RPC would surface a connection error.
            rpc: "http://127.0.0.1:1".into(),
            private_key: Some("  ".into()),
            verbose: false,
        };

        let err = run(&args).await.unwrap_err();
        assert!(matches!(err, AuditError::WalletNotConnected));
    }
}

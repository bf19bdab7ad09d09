use std::path::PathBuf;
use clap::Parser;
use dream_audit::blockchain::{ArtifactDeployer, BlockchainClient, HardhatArtifact};
use dream_audit::config::{parse_address_arg, DEFAULT_RPC_URL};
use dream_audit::contracts::defaults;
use dream_audit::verification::{ConfigurationVerdict, DeploymentPlan, DeploymentVerifier};
use dream_audit::{AuditError, Result};
use ethers::utils::{format_ether, parse_ether};

/// Deploy the DreamAudit registry and its fee treasury
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hardhat artifacts directory containing Treasury.json and DreamAudit.json
    #[arg(short, long, default_value = "artifacts")]
    artifacts: PathBuf,

    /// Wallet that owns the treasury and administers the registry
    #[arg(long, env = "SYSTEM_WALLET", default_value = defaults::SYSTEM_WALLET)]
    system_wallet: String,

    /// Fee per stored audit, in native token
    #[arg(long, default_value = "0.1")]
    fee: String,

    /// RPC URL
    #[arg(short, long, env = "SOMNIA_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc: String,

    /// Deployer private key
    #[arg(long, env = "DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

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

    println!("\n🚀 Starting DreamAudit + Treasury Deployment...\n");

    match run(&args).await {
        Ok(ConfigurationVerdict::Matches) => {
            println!("\n🎯 Configuration check passed! Deployment successful ✅\n");
            std::process::exit(0);
        }
        Ok(ConfigurationVerdict::Mismatched(mismatches)) => {
            println!("\n⚠️  On-chain values do not match expected parameters:");
            for m in mismatches {
                println!("   • {}: expected {}, found {}", m.field, m.expected, m.observed);
            }
            println!();
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("\n❌ Deployment failed: {}\n", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<ConfigurationVerdict> {
    let system_wallet = parse_address_arg("system wallet", &args.system_wallet)?;
    let fee = parse_ether(&args.fee)
        .map_err(|e| AuditError::Config(format!("fee {:?}: {}", args.fee, e)))?;

    let treasury_artifact = HardhatArtifact::load(&HardhatArtifact::find(&args.artifacts, "Treasury")?)?;
    let registry_artifact = HardhatArtifact::load(&HardhatArtifact::find(&args.artifacts, "DreamAudit")?)?;

    let client = BlockchainClient::new(&args.rpc).await?;
    let signer = client.signer(&args.private_key)?;
    let deployer = ArtifactDeployer::new(signer.clone());

    let deployer_address = deployer.deployer_address();
    println!("👤 Deployer: {:?}", deployer_address);
    println!("🌐 Network:  {} ({})", client.chain_name(), client.chain_id());
    println!("💰 Balance:  {} native token\n", format_ether(client.balance(deployer_address).await?));

    println!("⚙️  Deployment Parameters:");
    println!("   System Wallet: {:?}", system_wallet);
    println!("   Audit Fee:     {} native token\n", format_ether(fee));

    println!("🏦 Deploying Treasury...");
    let treasury = deployer.deploy(&treasury_artifact, system_wallet).await?;
    println!("✅ Treasury deployed at: {:?}", treasury);

    println!("\n📜 Deploying DreamAudit...");
    let registry = deployer
        .deploy(&registry_artifact, (system_wallet, treasury, fee))
        .await?;
    println!("✅ DreamAudit deployed at: {:?}", registry);

    let plan = DeploymentPlan {
        system_wallet,
        treasury,
        fee,
    };

    let verifier = DeploymentVerifier::new(signer);
    let observed = verifier.read(registry, treasury).await?;

    println!("\n✅ Verification Results:");
    println!("----------------------------");
    println!("DreamAudit.systemWallet: {:?}", observed.registry_system_wallet);
    println!("DreamAudit.treasury:     {:?}", observed.registry_treasury);
    println!("DreamAudit.fee:          {} native token", format_ether(observed.registry_fee));
    println!("Treasury.owner:          {:?}", observed.treasury_owner);
    println!("----------------------------");

    println!("\n📦 Deployment Summary:");
    println!("----------------------------");
    println!("Deployer:       {:?}", deployer_address);
    println!("System Wallet:  {:?}", system_wallet);
    println!("Treasury:       {:?}", treasury);
    println!("DreamAudit:     {:?}", registry);
    println!("Fee per Audit:  {} native token", format_ether(fee));
    println!("----------------------------");

    Ok(observed.check(&plan))
}

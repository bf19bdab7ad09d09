use std::sync::Arc;
use clap::Parser;
use dream_audit::*;
use dream_audit::auditors::OpenAiAuditor;
use dream_audit::blockchain::{BlockchainClient, ExplorerClient, RegistryReader};
use dream_audit::config::{ChainSettings, ExplorerSettings, GeneratorSettings, StorageSettings};
use dream_audit::core::DEFAULT_MAX_SOURCE_CHARS;
use dream_audit::server::{self, AppState};
use dream_audit::storage::FilebaseStore;

/// DreamAudit - AI smart-contract audits with IPFS-pinned reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind: String,

    /// Longest contract source accepted, in characters
    #[arg(long, env = "MAX_SOURCE_CHARS", default_value_t = DEFAULT_MAX_SOURCE_CHARS)]
    max_source_chars: usize,

    #[command(flatten)]
    explorer: ExplorerSettings,

    #[command(flatten)]
    generator: GeneratorSettings,

    #[command(flatten)]
    storage: StorageSettings,

    #[command(flatten)]
    chain: ChainSettings,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = if args.verbose {
        "dream_audit=debug,tower_http=debug"
    } else {
        "dream_audit=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let explorer = Arc::new(ExplorerClient::new(&args.explorer)?);
    let generator = Arc::new(OpenAiAuditor::new(&args.generator)?);
    tracing::info!("Audit model: {}", generator.model());
    let store = Arc::new(FilebaseStore::new(&args.storage)?);

    let orchestrator = AuditOrchestrator::new(explorer, generator, store)
        .with_max_source_chars(args.max_source_chars);
    let mut state = AppState::new(orchestrator);

    // Registry stats are optional; the audit flow never touches the chain.
    if let Some(registry) = args.chain.registry_address()? {
        match BlockchainClient::new(&args.chain.rpc_url).await {
            Ok(client) => {
                tracing::info!("Registry {:?} on {}", registry, client.chain_name());
                state = state.with_registry(RegistryReader::new(client.provider.clone(), registry));
            }
            Err(e) => tracing::warn!("Registry stats disabled: {}", e),
        }
    }

    let app = server::router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("DreamAudit listening on {}", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

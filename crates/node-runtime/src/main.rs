//! # Custody-Chain Node
//!
//! Starts the custody ledger: initializes logging, loads configuration,
//! seeds genesis participants if a genesis file is configured, and serves
//! until interrupted.
//!
//! ## Startup Sequence
//!
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Create the custody service over empty registries
//! 4. Apply the genesis file (if any)
//! 5. Signal ready and wait for Ctrl+C
//! 6. On shutdown, run the invariant audit and report statistics

use anyhow::{Context, Result};
use node_runtime::config::NodeConfig;
use node_runtime::genesis::GenesisConfig;
use node_runtime::service::CustodyService;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: the log level comes from it.
    let config = NodeConfig::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  Custody-Chain Node v{}", node_runtime::VERSION);
    info!("  Node: {}", config.node_name);
    info!("===========================================");

    let service = CustodyService::new();

    if let Some(path) = &config.genesis_path {
        let genesis = GenesisConfig::load(path)?;
        let ids = genesis
            .apply(&service)
            .await
            .context("genesis seeding failed")?;
        info!("Genesis applied: {} participant(s) registered", ids.len());
    } else {
        info!("No genesis file configured, starting with an empty registry");
    }

    info!("Ledger is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Shutdown: audit the final state and report what happened.
    let audit = service.audit().await;
    if audit.is_ok() {
        info!("Shutdown audit: all invariants hold");
    } else {
        warn!("Shutdown audit found violations: {:?}", audit.violations);
    }

    let stats = service.stats().await;
    info!(
        participants = stats.participants_registered,
        products = stats.products_registered,
        transfers_accepted = stats.transfers_accepted,
        transfers_rejected = stats.transfers_rejected,
        "Final statistics"
    );

    Ok(())
}

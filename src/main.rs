use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::EnvFilter;

use mcp_zamvoyage::adapters::catalog::static_catalog::StaticCatalog;
use mcp_zamvoyage::adapters::processor::SimulatedProcessor;
use mcp_zamvoyage::adapters::store::memory_store::MemoryDraftStore;
use mcp_zamvoyage::config::load_config;
use mcp_zamvoyage::domain::currency::Currency;
use mcp_zamvoyage::mcp::server::VoyageMcpServer;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    // Look in the directory where the binary is
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting mcp-zamvoyage server");

    // Load configuration
    let config_path = find_config_path();
    let config = load_config(&config_path)?;

    // Build dependencies
    let catalog: Arc<dyn mcp_zamvoyage::ports::catalog::CatalogSource> = match &config.catalog.path
    {
        Some(path) => Arc::new(StaticCatalog::from_file(path)?),
        None => Arc::new(StaticCatalog::seeded()),
    };
    let drafts: Arc<dyn mcp_zamvoyage::ports::draft_store::DraftStore> =
        Arc::new(MemoryDraftStore::new(
            config.booking.max_drafts,
            Duration::from_secs(config.booking.draft_ttl_secs),
        ));
    let processor: Arc<dyn mcp_zamvoyage::ports::processor::BookingProcessor> = Arc::new(
        SimulatedProcessor::new(Duration::from_millis(config.booking.confirm_delay_ms)),
    );
    let currency = Currency::from_code(&config.currency.default)?;

    let server = VoyageMcpServer::new(catalog, drafts, processor, config.suggest, currency);

    // Start MCP server over stdio
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}

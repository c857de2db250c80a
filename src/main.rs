use std::collections::BTreeMap;
use std::sync::Arc;

use pcp_transport_core::features::offices::services::map_service;
use pcp_transport_core::features::offices::OfficeDirectoryService;
use pcp_transport_core::shared::constants::QUICK_REGIONS;
use pcp_transport_core::{Config, PcpTransportApi, PcpTransportClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Network calls only; one thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded (API: {})", config.pcp.base_url);

    let client: Arc<dyn PcpTransportApi> = Arc::new(
        PcpTransportClient::new(config.pcp.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize PCP client: {}", e))?,
    );

    let directory = OfficeDirectoryService::with_region(client, config.app.default_region.clone());
    directory.initialize().await;

    let state = directory.snapshot().await;
    if let Some(error) = state.error {
        anyhow::bail!("Failed to load branch offices: {}", error);
    }

    let mut per_province: BTreeMap<&str, usize> = BTreeMap::new();
    for office in &state.offices {
        *per_province.entry(office.province_name.as_str()).or_default() += 1;
    }
    for (province, count) in &per_province {
        tracing::info!("{}: {} offices", province, count);
    }

    tracing::info!(
        "{} offices in {} provinces / {} branches, {} with location data (region: {})",
        state.offices.len(),
        state.provinces.len(),
        state.branches.len(),
        map_service::offices_with_coordinates(&state.offices).len(),
        state.current_region.as_deref().unwrap_or("all")
    );
    tracing::info!("Quick region filters: {}", QUICK_REGIONS.join(", "));

    Ok(())
}

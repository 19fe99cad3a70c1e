//! Tijara portal edge server binary.

use tijara_edge::{AppState, EdgeConfig};
use tijara_infrastructure::GatewayConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let edge_config = EdgeConfig::from_env()?;
    let gateway_config = GatewayConfig::from_env()?;

    tracing::info!(
        backend = %gateway_config.base_url,
        "Starting Tijara portal edge v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new(&gateway_config, &edge_config.data_dir)?;
    tijara_edge::run_server(edge_config.bind_addr, state).await?;

    Ok(())
}

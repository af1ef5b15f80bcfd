use berachain_defi_mcp::{config, constants, ethereum, server};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Berachain DeFi MCP Server...");

    let config = config::Config::from_env()?;
    let client =
        ethereum::EthereumClient::new(&config.rpc_url, config.private_key.as_deref()).await?;
    let chain_config = constants::ChainConfig::berachain();

    server::run(client, chain_config).await?;

    Ok(())
}

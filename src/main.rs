use crate::app_config::AppConfig;
use crate::cli::Cli;
use crate::miot::GatewayClient;
use crate::purifier::AirPurifier;
use clap::Parser;
use tracing::{debug, info};

mod app_config;
mod cli;
mod extensions;
mod miot;
mod purifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_max_level(config.core().log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let model = config.device().model();
    let client = miot::new_client(&config)?;
    let purifier = AirPurifier::new(GatewayClient::new(client, &config, model.mapping()));
    info!(gateway = config.gateway().url(), "✅  Using {} through the gateway", model);

    cli::run(&purifier, &cli.command, &mut std::io::stdout().lock()).await?;

    Ok(())
}

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod cli;
mod config;
mod utils;
mod warehouse;

use config::Config;
use warehouse::WarehouseClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();

    let mut config = Config::load_from_file(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    utils::logging::init_tracing(&config.logging);
    info!("snowflake connectivity check starting");

    let client = WarehouseClient::connect(&config.warehouse)?;
    info!("connecting to account {}", client.account());
    let _cursor = client.open_cursor().await?;

    println!("✅ Connected to Snowflake successfully!");
    Ok(())
}

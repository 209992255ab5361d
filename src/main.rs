use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::path::Path;

use crypto_dashboard_api::cli::Cli;
use crypto_dashboard_api::config::Config;
use crypto_dashboard_api::web;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| anyhow::anyhow!("Configuration loading failed: {}", e))?,
        None => {
            let default_path = Path::new("config/config.toml");
            if default_path.exists() {
                Config::load(default_path)
                    .map_err(|e| anyhow::anyhow!("Configuration loading failed: {}", e))?
            } else {
                warn!("No configuration file found, using defaults");
                Config::default()
            }
        }
    };
    info!("Configuration loaded successfully.");

    web::server::run(config).await?;
    Ok(())
}

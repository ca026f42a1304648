//! Main entry point for the faucet relay.

use anyhow::Result;
use clap::{Arg, Command};
use faucet_relay::{config::RelayConfig, http::start_server};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Parse command line arguments
    let matches = Command::new("faucet-relay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Faucet Relay - Validate and forward token claims to a distribution service")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to configuration file")
                .default_value("faucet-relay.toml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .help("Generate a default configuration file and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<String>("config").unwrap();

    // Handle config generation
    if matches.get_flag("generate-config") {
        return generate_config(config_path);
    }

    info!("Starting Faucet Relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading configuration from: {}", config_path);

    // Load configuration
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("Use --generate-config to create a default configuration file");
            std::process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!("Configuration loaded and validated successfully");
    info!(
        "Server will bind to: {}:{}",
        config.http.bind_address, config.http.port
    );
    info!("Downstream claim endpoint: {}", config.downstream.claim_url);

    // Start the server
    if let Err(e) = start_server(&config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Load configuration from file
fn load_config(path: &str) -> Result<RelayConfig> {
    if !Path::new(path).exists() {
        return Err(anyhow::anyhow!(
            "Configuration file '{}' not found. Use --generate-config to create one.",
            path
        ));
    }

    RelayConfig::from_file(path).map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))
}

/// Generate a default configuration file
fn generate_config(path: &str) -> Result<()> {
    let config = RelayConfig::default();

    config.save_to_file(path)?;

    println!("Generated default configuration file: {}", path);
    println!();
    println!("Before running the relay you may want to:");
    println!("1. Point downstream.claim_url at your token-distribution endpoint");
    println!("2. Adjust the HTTP bind address and port (http section)");
    println!();
    println!("Example usage after configuration:");
    println!("  cargo run --bin faucet-relay -- --config {}", path);

    Ok(())
}

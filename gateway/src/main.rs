// FlameWire gateway
// Serves the chain registry and the mock JSON-RPC proxy over HTTP

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use gateway::{logging, ApiServer, GatewayConfig, GatewayState};

#[derive(Parser)]
#[command(name = "flamewire")]
#[command(about = "FlameWire API gateway", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overrides server.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Region reported by /api/health, overrides server.region
    #[arg(short, long)]
    region: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut GatewayConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(region) = &self.region {
            config.server.region = region.clone();
        }
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = GatewayConfig::resolve_path(cli.config.as_deref());
    let mut config =
        GatewayConfig::load(config_path.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        print!("{}", config.to_toml().context("failed to render configuration")?);
        return Ok(());
    }

    logging::init(&config.logging);
    info!("FlameWire gateway v{} starting", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => info!("Loaded configuration from: {:?}", path),
        None => warn!("No configuration file found, using defaults"),
    }

    let server = ApiServer::new(GatewayState::new(config))
        .start()
        .context("failed to start API server")?;
    server.await.context("API server terminated")?;

    info!("FlameWire gateway stopped");
    Ok(())
}

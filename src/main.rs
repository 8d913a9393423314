use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use experience_engine::api::{AppState, create_router};
use experience_engine::config::ConfigLoader;

/// Serve the experience duration API.
#[derive(Debug, Parser)]
#[command(name = "experience-engine", version, about)]
struct Cli {
    /// YAML configuration file; built-in defaults are used when omitted.
    #[arg(short, long, env = "EXPERIENCE_ENGINE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "experience_engine=debug,info"
    } else {
        "experience_engine=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => {
            info!("No configuration file given, using defaults");
            ConfigLoader::default()
        }
    };

    let mut server = loader.config().server.clone();
    if let Some(host) = cli.host {
        server.host = host;
    }
    if let Some(port) = cli.port {
        server.port = port;
    }

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Experience engine listening");

    axum::serve(listener, create_router(AppState::new(loader))).await?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use toraja_config::{ConfigLoad, ConfigLoader};
use toraja_server::{create_app, infra::startup::build_state};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "toraja-server")]
#[command(about = "Bilingual tourism site API for Tana Toraja")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Site configuration file (TOML or JSON)
    #[arg(short, long, env = "SITE_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Alternate `.env` file
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "site configuration loaded");
    }
    for warning in &warnings {
        warn!(message = %warning, "configuration warning");
    }

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    let addr = config.server.bind_address();
    let base_url = config.site.base_url.clone();
    let state = build_state(config)
        .context("failed to build application state")?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, %base_url, "Starting Toraja tourism server");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

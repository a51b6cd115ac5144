#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "storefront server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, site_root = %config.site_root.display(), "storefront listening");
    axum::serve(listener, app).await?;
    Ok(())
}

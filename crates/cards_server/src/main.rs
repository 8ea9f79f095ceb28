//! Card server entry point.

use anyhow::{anyhow, Context};
use cards_server::{open_state, serve, Config};
use clap::Parser;
use log::warn;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    cards_core::init_logging(config.effective_log_level(), config.log_dir.as_deref())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    let state = open_state(&config)?;
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    serve(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        warn!("event=shutdown_signal module=http status=error error={err}");
        std::future::pending::<()>().await;
    }
}

//! HTTP surface of the card service: a JSON API under `/cards` and
//! server-rendered pages under `/ui`, both backed by one card store.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::build_router;
pub use state::{AppState, CardStore};

use anyhow::Context;
use cards_core::db::{open_db, open_db_in_memory};
use log::info;
use render::BuiltinTemplates;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Opens the configured database and builds handler state around it.
pub fn open_state(config: &Config) -> anyhow::Result<AppState> {
    let conn = if config.in_memory {
        open_db_in_memory().context("failed to open in-memory card database")?
    } else {
        open_db(&config.db_path).with_context(|| {
            format!(
                "failed to open card database `{}`",
                config.db_path.display()
            )
        })?
    };
    Ok(AppState::new(
        CardStore::new(conn),
        Arc::new(BuiltinTemplates),
    ))
}

/// Serves requests on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!("event=http_listen module=http status=ok addr={addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("card server error")?;

    info!("event=http_stop module=http status=ok addr={addr}");
    Ok(())
}

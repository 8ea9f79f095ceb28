//! Command-line and environment configuration for the server binary.

use cards_core::default_log_level;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Serves the card JSON API and HTML pages.
#[derive(Debug, Clone, Parser)]
#[command(name = "cards_server", version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "CARDS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// SQLite database file; created on first start.
    #[arg(long, env = "CARDS_DB_PATH", default_value = "cards.sqlite3")]
    pub db_path: PathBuf,

    /// Use a transient in-memory database instead of `--db-path`.
    #[arg(long, conflicts_with = "db_path")]
    pub in_memory: bool,

    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "CARDS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logs go to stderr when unset.
    #[arg(long, env = "CARDS_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Config {
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }
}

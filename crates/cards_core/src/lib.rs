//! Core domain logic for the card service.
//! This crate owns the card model, its SQLite store and the CRUD use cases.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::{Card, CardId, CardValidationError, DEFAULT_STATUS};
pub use repo::card_repo::{CardRepository, SqliteCardRepository};
pub use service::card_service::CardService;
pub use service::error::{CardError, CardResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

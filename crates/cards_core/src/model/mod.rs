//! Card domain model.
//!
//! # Responsibility
//! - Define the single persisted record managed by the service.
//!
//! # Invariants
//! - Every persisted card is identified by a store-assigned `CardId`.

pub mod card;

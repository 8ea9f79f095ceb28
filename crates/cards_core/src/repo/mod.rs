//! Repository layer over the card store.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Keep SQL details out of the HTTP layers.
//!
//! # Invariants
//! - Repository calls fail only on storage errors (`DbError`); whether a
//!   card must exist is decided by the service layer.

pub mod card_repo;

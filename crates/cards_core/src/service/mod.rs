//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository calls into the use cases the HTTP layers expose.
//! - Keep HTTP handlers decoupled from storage details.

pub mod card_service;
pub mod error;

//! Card domain model.
//!
//! # Responsibility
//! - Define the canonical card record shared by the JSON and HTML layers.
//! - Provide the single form-level validation rule.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on first insert.
//! - Once assigned, `id` is never rewritten by update paths.
//! - `status` is free-form text; `OPEN` is only a convention.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned card identifier (SQLite `INTEGER PRIMARY KEY`).
pub type CardId = i64;

/// Conventional status for freshly created cards.
pub const DEFAULT_STATUS: &str = "OPEN";

/// Canonical card record.
///
/// Missing JSON/form fields deserialize to empty strings, matching the
/// permissive binding of the HTTP layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Omitted from JSON output until assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

/// Field-level validation failure for form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Error for CardValidationError {}

impl Card {
    /// Creates an unsaved card without an identifier.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Returns a copy carrying `id`, used by replace-by-id paths.
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns whether the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the "title must not be blank" rule.
    ///
    /// Only the HTML create path enforces this; the JSON API stores any
    /// strings it receives.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.title.trim().is_empty() {
            return Err(CardValidationError {
                field: "title",
                message: "must not be blank",
            });
        }
        Ok(())
    }
}

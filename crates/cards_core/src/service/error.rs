//! Use-case error taxonomy shared by the HTTP layers.

use crate::db::DbError;
use crate::model::card::{CardId, CardValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CardResult<T> = Result<T, CardError>;

#[derive(Debug)]
pub enum CardError {
    /// Requested id is absent.
    NotFound(CardId),
    /// Form input violated a required-field rule; nothing was persisted.
    Validation(CardValidationError),
    /// Infrastructure failure; fatal for the current request.
    Storage(DbError),
    /// The store call was aborted before it finished (worker panic or
    /// runtime shutdown).
    Interrupted(String),
}

impl Display for CardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Card {id} not found"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Interrupted(reason) => write!(f, "store call interrupted: {reason}"),
        }
    }
}

impl Error for CardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) | Self::Interrupted(_) => None,
        }
    }
}

impl From<CardValidationError> for CardError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for CardError {
    fn from(value: DbError) -> Self {
        Self::Storage(value)
    }
}

//! Card use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points shared by the JSON and HTML layers.
//! - Translate absent optionals into `CardError::NotFound` where a use case
//!   requires the card to exist.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Replace paths always write under the caller's path id.

use crate::model::card::{Card, CardId};
use crate::repo::card_repo::CardRepository;
use crate::service::error::{CardError, CardResult};
use log::{debug, info};

/// Use-case service wrapper for card operations.
pub struct CardService<R: CardRepository> {
    repo: R,
}

impl<R: CardRepository> CardService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_cards(&self) -> CardResult<Vec<Card>> {
        let cards = self.repo.find_all()?;
        debug!("event=card_list module=service status=ok count={}", cards.len());
        Ok(cards)
    }

    /// Gets one card, failing with `NotFound` when the id is absent.
    pub fn get_card(&self, id: CardId) -> CardResult<Card> {
        self.repo.find_by_id(id)?.ok_or(CardError::NotFound(id))
    }

    /// Stores a new card. Any id carried by `card` is ignored.
    pub fn create_card(&self, card: &Card) -> CardResult<Card> {
        let created = self.repo.insert(card)?;
        info!(
            "event=card_create module=service status=ok card_id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Validates form input, then stores it as a new card.
    ///
    /// Returns `CardError::Validation` without touching the store when the
    /// title is blank.
    pub fn create_validated_card(&self, card: &Card) -> CardResult<Card> {
        card.validate()?;
        self.create_card(card)
    }

    /// Writes `card` under `id`, overriding whatever id the body carried.
    ///
    /// Upserts: an absent id is created with the caller-supplied value.
    pub fn replace_card(&self, id: CardId, card: Card) -> CardResult<Card> {
        let existed = self.repo.exists(id)?;
        let saved = self.repo.save(&card.with_id(id))?;
        info!(
            "event=card_replace module=service status=ok card_id={id} created={}",
            !existed
        );
        Ok(saved)
    }

    /// Deletes a card if present. Missing ids are not an error.
    pub fn delete_card(&self, id: CardId) -> CardResult<()> {
        let removed = self.repo.delete_by_id(id)?;
        info!("event=card_delete module=service status=ok card_id={id} removed={removed}");
        Ok(())
    }

    /// Deletes a card that must exist, failing with `NotFound` otherwise.
    pub fn delete_existing_card(&self, id: CardId) -> CardResult<()> {
        if !self.repo.exists(id)? {
            return Err(CardError::NotFound(id));
        }
        self.delete_card(id)
    }
}

//! Card repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/find/save/delete over the `cards` table.
//! - Assign identifiers on insert and preserve them on update.
//!
//! # Invariants
//! - `insert` ignores any caller-supplied id; the store assigns one.
//! - `insert` keeps working after an upsert takes `i64::MAX`: the `cards.id`
//!   rowid is not `AUTOINCREMENT`, so SQLite falls back to an unused id.
//! - Errors are storage failures only; absence is reported as `None`/`false`.
//! - `update` is an upsert keyed by the supplied id.
//! - `delete_by_id` never fails for a missing id.

use crate::db::DbResult;
use crate::model::card::{Card, CardId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const CARD_SELECT_SQL: &str = "SELECT id, title, description, status FROM cards";

/// Repository interface for card storage.
pub trait CardRepository {
    /// Persists `card` under a fresh id and returns the stored record.
    fn insert(&self, card: &Card) -> DbResult<Card>;
    /// Writes `card` under `id`, creating the row when absent.
    fn update(&self, id: CardId, card: &Card) -> DbResult<Card>;
    fn find_by_id(&self, id: CardId) -> DbResult<Option<Card>>;
    /// Lists every card in ascending id order.
    fn find_all(&self) -> DbResult<Vec<Card>>;
    /// Removes the card when present and reports whether a row was deleted.
    fn delete_by_id(&self, id: CardId) -> DbResult<bool>;
    fn exists(&self, id: CardId) -> DbResult<bool>;

    /// Inserts when `card` has no id, upserts otherwise.
    fn save(&self, card: &Card) -> DbResult<Card> {
        match card.id {
            Some(id) => self.update(id, card),
            None => self.insert(card),
        }
    }
}

/// SQLite-backed card repository borrowing an open connection.
pub struct SqliteCardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCardRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CardRepository for SqliteCardRepository<'_> {
    fn insert(&self, card: &Card) -> DbResult<Card> {
        self.conn.execute(
            "INSERT INTO cards (title, description, status) VALUES (?1, ?2, ?3);",
            params![card.title, card.description, card.status],
        )?;

        Ok(Card {
            id: Some(self.conn.last_insert_rowid()),
            ..card.clone()
        })
    }

    fn update(&self, id: CardId, card: &Card) -> DbResult<Card> {
        self.conn.execute(
            "INSERT INTO cards (id, title, description, status)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                status = excluded.status;",
            params![id, card.title, card.description, card.status],
        )?;

        Ok(card.clone().with_id(id))
    }

    fn find_by_id(&self, id: CardId) -> DbResult<Option<Card>> {
        let card = self
            .conn
            .query_row(
                &format!("{CARD_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_card_row,
            )
            .optional()?;
        Ok(card)
    }

    fn find_all(&self) -> DbResult<Vec<Card>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CARD_SELECT_SQL} ORDER BY id ASC;"))?;
        let cards = stmt
            .query_map([], parse_card_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cards)
    }

    fn delete_by_id(&self, id: CardId) -> DbResult<bool> {
        let changed = self.conn.execute("DELETE FROM cards WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn exists(&self, id: CardId) -> DbResult<bool> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM cards WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

fn parse_card_row(row: &Row<'_>) -> rusqlite::Result<Card> {
    Ok(Card {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        description: row.get("description")?,
        status: row.get("status")?,
    })
}

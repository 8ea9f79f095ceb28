//! Shared request state.
//!
//! # Responsibility
//! - Own the process-wide card store handle and the template renderer.
//! - Hand each handler a short-lived service bound to the store.
//!
//! # Invariants
//! - Exactly one connection backs the store; every call holds its lock for
//!   the duration of a single use case.
//! - Store calls run on the blocking pool, never on async worker threads.

use crate::render::TemplateRenderer;
use cards_core::{CardError, CardResult, CardService, SqliteCardRepository};
use log::error;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, PoisonError};

/// Store handle injected into every handler.
#[derive(Clone)]
pub struct CardStore {
    conn: Arc<Mutex<Connection>>,
}

impl CardStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs one use case against the store on the blocking thread pool.
    ///
    /// # Errors
    /// - Whatever the use case returns.
    /// - `CardError::Interrupted` when the blocking task panics or is cancelled.
    pub async fn with_service<T, F>(&self, op: F) -> CardResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&CardService<SqliteCardRepository<'_>>) -> CardResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            // A panic mid-call leaves no partial SQLite state behind; keep serving.
            let conn = conn.lock().unwrap_or_else(PoisonError::into_inner);
            let service = CardService::new(SqliteCardRepository::new(&conn));
            op(&service)
        })
        .await
        .map_err(|err| {
            error!("event=store_call module=http status=error error_code=join_failed error={err}");
            CardError::Interrupted(err.to_string())
        })?
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: CardStore,
    pub renderer: Arc<dyn TemplateRenderer>,
}

impl AppState {
    pub fn new(store: CardStore, renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }
}

#[cfg(test)]
mod tests {
    use super::CardStore;
    use cards_core::db::open_db_in_memory;
    use cards_core::{Card, CardError};

    #[tokio::test]
    async fn with_service_runs_use_case_off_the_async_thread() {
        let store = CardStore::new(open_db_in_memory().unwrap());
        let caller = std::thread::current().id();

        let (created, worker) = store
            .with_service(|service| {
                let card = service.create_card(&Card::new("blocking", "", "OPEN"))?;
                Ok((card, std::thread::current().id()))
            })
            .await
            .unwrap();

        assert_ne!(worker, caller);
        let id = created.id.unwrap();
        let loaded = store
            .with_service(move |service| service.get_card(id))
            .await
            .unwrap();
        assert_eq!(loaded.title, "blocking");
    }

    #[tokio::test]
    async fn panicking_use_case_surfaces_as_interrupted_and_store_keeps_serving() {
        let store = CardStore::new(open_db_in_memory().unwrap());

        let err = store
            .with_service(|_service| -> cards_core::CardResult<()> {
                panic!("use case failed mid-call")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::Interrupted(_)));

        let cards = store
            .with_service(|service| service.list_cards())
            .await
            .unwrap();
        assert!(cards.is_empty());
    }
}

//! Implements a SQLite backed cash card store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    Error,
    cash_card::{CashCard, CashCardDraft, CashCardId},
    pagination::PageRequest,
    stores::CashCardStore,
};

/// Stores cash cards in the `cash_card` table of a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCashCardStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCashCardStore {
    /// Create a new cash card store.
    ///
    /// The caller should make sure the table exists first, e.g. with
    /// [initialize](crate::stores::sqlite::initialize).
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

/// Create the `cash_card` table and the index used for owner-scoped queries.
pub fn create_cash_card_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS cash_card (
            id INTEGER PRIMARY KEY,
            amount REAL NOT NULL,
            owner TEXT NOT NULL
        )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS cash_card_owner_idx ON cash_card(owner, id)",
        (),
    )?;

    Ok(())
}

/// Map a row of `SELECT id, amount, owner` to a [CashCard].
pub fn map_row_to_cash_card(row: &Row) -> Result<CashCard, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let owner = row.get(2)?;

    Ok(CashCard { id, amount, owner })
}

fn order_by_clause(page: &PageRequest) -> String {
    let mut terms: Vec<String> = page
        .sort
        .iter()
        .map(|order| format!("{} {}", order.property.column(), order.direction.keyword()))
        .collect();

    // The ID breaks ties so every page is deterministic.
    terms.push("id ASC".to_owned());

    terms.join(", ")
}

fn to_sql_integer(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CashCardStore for SQLiteCashCardStore {
    fn find_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<CashCard, Error> {
        self.lock()?
            .query_row(
                "SELECT id, amount, owner FROM cash_card WHERE id = ?1 AND owner = ?2",
                params![id, owner],
                map_row_to_cash_card,
            )
            .map_err(Error::from)
    }

    fn exists_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<bool, Error> {
        self.lock()?
            .query_row(
                "SELECT 1 FROM cash_card WHERE id = ?1 AND owner = ?2",
                params![id, owner],
                |_| Ok(()),
            )
            .optional()
            .map(|row| row.is_some())
            .map_err(Error::from)
    }

    fn find_by_owner(&self, owner: &str, page: &PageRequest) -> Result<Vec<CashCard>, Error> {
        // The ORDER BY terms come from a fixed set of column names, never from user input.
        let query = format!(
            "SELECT id, amount, owner FROM cash_card WHERE owner = ?1 ORDER BY {} LIMIT ?2 OFFSET ?3",
            order_by_clause(page)
        );

        let connection = self.lock()?;
        let mut statement = connection.prepare(&query)?;

        let cards = statement
            .query_map(
                params![
                    owner,
                    to_sql_integer(page.size),
                    to_sql_integer(page.offset())
                ],
                map_row_to_cash_card,
            )?
            .map(|maybe_card| maybe_card.map_err(Error::from))
            .collect();

        cards
    }

    fn save(&self, draft: CashCardDraft) -> Result<CashCard, Error> {
        let connection = self.lock()?;

        let id = match draft.id {
            Some(id) => {
                connection.execute(
                    "INSERT INTO cash_card (id, amount, owner) VALUES (?1, ?2, ?3)
                    ON CONFLICT(id) DO UPDATE SET amount = excluded.amount, owner = excluded.owner",
                    params![id, draft.amount, draft.owner],
                )?;

                id
            }
            None => {
                connection.execute(
                    "INSERT INTO cash_card (amount, owner) VALUES (?1, ?2)",
                    params![draft.amount, draft.owner],
                )?;

                connection.last_insert_rowid()
            }
        };

        Ok(CashCard {
            id,
            amount: draft.amount,
            owner: draft.owner,
        })
    }

    fn delete_by_id(&self, id: CashCardId) -> Result<(), Error> {
        self.lock()?
            .execute("DELETE FROM cash_card WHERE id = ?1", params![id])?;

        Ok(())
    }
}

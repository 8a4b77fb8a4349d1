//! Contains the SQLite backed stores and the function for preparing a database for them.

mod cash_card;

pub use cash_card::{SQLiteCashCardStore, create_cash_card_table, map_row_to_cash_card};

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, auth::UserDirectory, pagination::PaginationConfig};

/// Create the tables for the domain models if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_cash_card_table(connection)?;

    Ok(())
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCashCardStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(
    db_connection: Connection,
    user_directory: UserDirectory,
    pagination_config: PaginationConfig,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteCashCardStore::new(connection),
        user_directory,
        pagination_config,
    ))
}

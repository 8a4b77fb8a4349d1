//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{auth::UserDirectory, pagination::PaginationConfig, stores::CashCardStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: CashCardStore + Clone + Send + Sync,
{
    /// The store for every user's [cash cards](crate::CashCard).
    pub cash_card_store: S,
    /// The users that may log in.
    pub user_directory: Arc<UserDirectory>,
    /// The config that controls how lists of cash cards are paged.
    pub pagination_config: PaginationConfig,
}

impl<S> AppState<S>
where
    S: CashCardStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(
        cash_card_store: S,
        user_directory: UserDirectory,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            cash_card_store,
            user_directory: Arc::new(user_directory),
            pagination_config,
        }
    }
}

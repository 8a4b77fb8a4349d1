use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::{AppState, pagination::PaginationConfig, stores::CashCardStore};

/// The database ID of a cash card.
pub type CashCardId = i64;

/// A stored amount of money that belongs to a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashCard {
    /// The ID assigned by the store when the card was created.
    pub id: CashCardId,
    /// The amount of money on the card.
    pub amount: f64,
    /// The username of the user who created the card.
    pub owner: String,
}

/// The shape of a cash card to be saved in a [CashCardStore].
///
/// A draft without an ID is inserted as a new card. A draft with an ID
/// overwrites the card with that ID.
#[derive(Debug, Clone, PartialEq)]
pub struct CashCardDraft {
    /// The ID of the card to overwrite, or `None` to create a new card.
    pub id: Option<CashCardId>,
    /// The amount of money on the card.
    pub amount: f64,
    /// The username of the card's owner.
    pub owner: String,
}

impl CashCardDraft {
    /// A new card for `owner`, the store will assign its ID.
    pub fn new(amount: f64, owner: &str) -> Self {
        Self {
            id: None,
            amount,
            owner: owner.to_owned(),
        }
    }

    /// `existing` with its amount replaced. The ID and owner are kept.
    pub fn replacing(existing: &CashCard, amount: f64) -> Self {
        Self {
            id: Some(existing.id),
            amount,
            owner: existing.owner.clone(),
        }
    }
}

/// The JSON body for creating or updating a cash card.
///
/// Clients may send back a whole card, but only `amount` is ever used: the
/// ID comes from the store or the request path and the owner comes from the
/// authenticated user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CashCardRequest {
    /// Ignored.
    #[serde(default)]
    pub id: Option<CashCardId>,
    /// The amount of money on the card.
    pub amount: f64,
    /// Ignored.
    #[serde(default)]
    pub owner: Option<String>,
}

/// The state needed by the cash card endpoints.
#[derive(Debug, Clone)]
pub struct CashCardState<S> {
    /// The store holding every user's cash cards.
    pub store: S,
    /// The config that controls how lists of cash cards are paged.
    pub pagination_config: PaginationConfig,
}

impl<S> FromRef<AppState<S>> for CashCardState<S>
where
    S: CashCardStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.cash_card_store.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

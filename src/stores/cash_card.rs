//! Defines the cash card store trait.

use crate::{
    Error,
    cash_card::{CashCard, CashCardDraft, CashCardId},
    pagination::PageRequest,
};

/// Handles the storage and retrieval of cash cards.
///
/// Lookups are scoped by owner. A card that exists but belongs to someone
/// else is treated exactly like a card that does not exist.
pub trait CashCardStore {
    /// Get the card with `id` if it is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [Error::NotFound] if no card has both the given `id` and `owner`.
    fn find_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<CashCard, Error>;

    /// Whether a card with `id` that is owned by `owner` exists.
    fn exists_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<bool, Error>;

    /// Get one page of the cards owned by `owner`, sorted as described by `page`.
    ///
    /// Pages past the end of the data are empty rather than an error.
    fn find_by_owner(&self, owner: &str, page: &PageRequest) -> Result<Vec<CashCard>, Error>;

    /// Insert `draft` if it has no ID, otherwise overwrite the card with the same ID.
    ///
    /// Returns the card as stored, including its assigned ID.
    fn save(&self, draft: CashCardDraft) -> Result<CashCard, Error>;

    /// Delete the card with `id` regardless of owner.
    ///
    /// Callers must check ownership with [CashCardStore::exists_by_id_and_owner]
    /// first. Deleting an ID that is not in the store does nothing.
    fn delete_by_id(&self, id: CashCardId) -> Result<(), Error>;
}

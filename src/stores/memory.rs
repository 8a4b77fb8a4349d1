//! Implements a cash card store that keeps everything in memory.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    cash_card::{CashCard, CashCardDraft, CashCardId},
    pagination::{PageRequest, SortDirection, SortOrder, SortProperty},
    stores::CashCardStore,
};

#[derive(Debug, Default)]
struct Cards {
    by_id: BTreeMap<CashCardId, CashCard>,
    /// The largest ID ever stored, new cards get the next one.
    max_id: CashCardId,
}

/// Stores cash cards in a map that is shared between clones of the store.
///
/// Nothing is persisted. Results are ordered the same way as
/// [SQLiteCashCardStore](crate::stores::SQLiteCashCardStore) orders them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCashCardStore {
    cards: Arc<Mutex<Cards>>,
}

impl InMemoryCashCardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Cards>, Error> {
        self.cards.lock().map_err(|error| {
            tracing::error!("could not acquire cash card store lock: {error}");
            Error::DatabaseLockError
        })
    }
}

fn compare_by(order: &SortOrder, left: &CashCard, right: &CashCard) -> Ordering {
    let ordering = match order.property {
        SortProperty::Id => left.id.cmp(&right.id),
        SortProperty::Amount => left.amount.total_cmp(&right.amount),
        SortProperty::Owner => left.owner.cmp(&right.owner),
    };

    match order.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

impl CashCardStore for InMemoryCashCardStore {
    fn find_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<CashCard, Error> {
        self.lock()?
            .by_id
            .get(&id)
            .filter(|card| card.owner == owner)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn exists_by_id_and_owner(&self, id: CashCardId, owner: &str) -> Result<bool, Error> {
        Ok(self
            .lock()?
            .by_id
            .get(&id)
            .is_some_and(|card| card.owner == owner))
    }

    fn find_by_owner(&self, owner: &str, page: &PageRequest) -> Result<Vec<CashCard>, Error> {
        let mut owned: Vec<CashCard> = self
            .lock()?
            .by_id
            .values()
            .filter(|card| card.owner == owner)
            .cloned()
            .collect();

        // Values come out of the map in ID order and the sort is stable, so
        // ties stay in ascending ID order.
        owned.sort_by(|left, right| {
            page.sort
                .iter()
                .map(|order| compare_by(order, left, right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);

        Ok(owned.into_iter().skip(offset).take(size).collect())
    }

    fn save(&self, draft: CashCardDraft) -> Result<CashCard, Error> {
        let mut cards = self.lock()?;

        let id = match draft.id {
            Some(id) => id,
            None => cards.max_id.checked_add(1).ok_or_else(|| {
                tracing::error!("cannot assign a cash card ID past {}", cards.max_id);
                Error::IdsExhausted
            })?,
        };
        cards.max_id = cards.max_id.max(id);

        let card = CashCard {
            id,
            amount: draft.amount,
            owner: draft.owner,
        };
        cards.by_id.insert(id, card.clone());

        Ok(card)
    }

    fn delete_by_id(&self, id: CashCardId) -> Result<(), Error> {
        self.lock()?.by_id.remove(&id);

        Ok(())
    }
}

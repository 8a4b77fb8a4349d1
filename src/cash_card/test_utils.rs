use axum::extract::State;

use crate::{
    auth::Principal,
    cash_card::{CashCardDraft, CashCardState},
    pagination::PaginationConfig,
    stores::{CashCardStore, InMemoryCashCardStore},
};

/// A store with jack1's three cards and one card owned by kumar2.
#[track_caller]
pub(crate) fn must_create_seeded_state() -> CashCardState<InMemoryCashCardStore> {
    let store = InMemoryCashCardStore::new();

    for (id, amount, owner) in [
        (99, 123.45, "jack1"),
        (21, 37.69, "jack1"),
        (101, 150.00, "jack1"),
        (102, 200.00, "kumar2"),
    ] {
        store
            .save(CashCardDraft {
                id: Some(id),
                amount,
                owner: owner.to_owned(),
            })
            .expect("could not save test cash card");
    }

    CashCardState {
        store,
        pagination_config: PaginationConfig::default(),
    }
}

pub(crate) fn state(
    state: &CashCardState<InMemoryCashCardStore>,
) -> State<CashCardState<InMemoryCashCardStore>> {
    State(state.clone())
}

pub(crate) fn jack() -> Principal {
    Principal::new("jack1")
}

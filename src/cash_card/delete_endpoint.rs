//! Defines the endpoint for deleting a cash card.

use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    auth::Principal,
    cash_card::{CashCardId, CashCardState},
    stores::CashCardStore,
};

/// A route handler for deleting one of the user's cash cards.
///
/// Responds with 204 on success, or 404 if the user has no card with the ID.
pub async fn delete_cash_card_endpoint<S>(
    State(state): State<CashCardState<S>>,
    Extension(principal): Extension<Principal>,
    Path(cash_card_id): Path<CashCardId>,
) -> Result<StatusCode, Error>
where
    S: CashCardStore,
{
    if !state
        .store
        .exists_by_id_and_owner(cash_card_id, principal.name())?
    {
        return Err(Error::NotFound);
    }

    state.store.delete_by_id(cash_card_id)?;
    tracing::info!(
        "Deleted cash card {cash_card_id} for \"{}\"",
        principal.name()
    );

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{Extension, extract::Path, http::StatusCode};

    use crate::{
        Error,
        cash_card::{
            delete_cash_card_endpoint,
            test_utils::{jack, must_create_seeded_state, state},
        },
        pagination::PageRequest,
        stores::CashCardStore,
    };

    #[tokio::test]
    async fn deletes_owned_card() {
        let cash_cards = must_create_seeded_state();

        let status = delete_cash_card_endpoint(state(&cash_cards), Extension(jack()), Path(99))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(
            cash_cards.store.find_by_id_and_owner(99, "jack1"),
            Err(Error::NotFound)
        );
    }

    #[tokio::test]
    async fn missing_card_is_not_found() {
        let cash_cards = must_create_seeded_state();

        let got =
            delete_cash_card_endpoint(state(&cash_cards), Extension(jack()), Path(99999)).await;

        assert_eq!(got, Err(Error::NotFound));
        assert_eq!(
            cash_cards
                .store
                .find_by_owner("jack1", &PageRequest::default())
                .unwrap()
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn other_users_card_is_not_found_and_kept() {
        let cash_cards = must_create_seeded_state();

        let got = delete_cash_card_endpoint(state(&cash_cards), Extension(jack()), Path(102)).await;

        assert_eq!(got, Err(Error::NotFound));
        assert_eq!(
            cash_cards.store.exists_by_id_and_owner(102, "kumar2"),
            Ok(true)
        );
    }
}

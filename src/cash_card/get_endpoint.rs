//! Defines the endpoint for getting a single cash card.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::{
    Error,
    auth::Principal,
    cash_card::{CashCard, CashCardId, CashCardState},
    stores::CashCardStore,
};

/// A route handler for getting one of the user's cash cards by its ID.
///
/// Responds with 404 if the card does not exist or belongs to another user.
pub async fn get_cash_card_endpoint<S>(
    State(state): State<CashCardState<S>>,
    Extension(principal): Extension<Principal>,
    Path(cash_card_id): Path<CashCardId>,
) -> Result<Json<CashCard>, Error>
where
    S: CashCardStore,
{
    state
        .store
        .find_by_id_and_owner(cash_card_id, principal.name())
        .map(Json)
}

//! Defines the endpoint for updating a cash card.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    auth::Principal,
    cash_card::{CashCardDraft, CashCardId, CashCardRequest, CashCardState},
    stores::CashCardStore,
};

/// A route handler for changing the amount on one of the user's cash cards.
///
/// The card keeps its ID and owner whatever the request body says. Responds
/// with 404 rather than creating the card if the user has no card with the ID.
pub async fn update_cash_card_endpoint<S>(
    State(state): State<CashCardState<S>>,
    Extension(principal): Extension<Principal>,
    Path(cash_card_id): Path<CashCardId>,
    Json(request): Json<CashCardRequest>,
) -> Result<StatusCode, Error>
where
    S: CashCardStore,
{
    let existing = state
        .store
        .find_by_id_and_owner(cash_card_id, principal.name())?;

    state
        .store
        .save(CashCardDraft::replacing(&existing, request.amount))?;

    Ok(StatusCode::NO_CONTENT)
}

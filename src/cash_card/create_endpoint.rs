//! Defines the endpoint for creating a cash card.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    auth::Principal,
    cash_card::{CashCardDraft, CashCardRequest, CashCardState},
    endpoints::{self, format_endpoint},
    stores::CashCardStore,
};

/// A route handler for creating a cash card owned by the user.
///
/// Any `id` or `owner` in the request body is ignored. Responds with 201 and
/// a `Location` header pointing at the new card.
pub async fn create_cash_card_endpoint<S>(
    State(state): State<CashCardState<S>>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CashCardRequest>,
) -> Result<Response, Error>
where
    S: CashCardStore,
{
    let cash_card = state
        .store
        .save(CashCardDraft::new(request.amount, principal.name()))?;

    tracing::info!(
        "Created cash card {} for \"{}\"",
        cash_card.id,
        cash_card.owner
    );

    let location = format_endpoint(endpoints::CASH_CARD, cash_card.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)]).into_response())
}

//! Application router configuration.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState,
    auth::basic_auth_guard,
    cash_card::{
        create_cash_card_endpoint, delete_cash_card_endpoint, get_cash_card_endpoint,
        list_cash_cards_endpoint, update_cash_card_endpoint,
    },
    endpoints,
    stores::CashCardStore,
};

/// Return a router with all the app's routes.
///
/// Every route requires HTTP Basic credentials for a user with the card owner role.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: CashCardStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::CASH_CARDS,
            get(list_cash_cards_endpoint::<S>).post(create_cash_card_endpoint::<S>),
        )
        .route(
            endpoints::CASH_CARD,
            get(get_cash_card_endpoint::<S>)
                .put(update_cash_card_endpoint::<S>)
                .delete(delete_cash_card_endpoint::<S>),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_guard,
        ))
        .with_state(state)
}

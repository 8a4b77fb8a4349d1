//! Defines the endpoint for listing the user's cash cards.

use axum::{Extension, Json, extract::State};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::{
    Error,
    auth::Principal,
    cash_card::{CashCard, CashCardState},
    stores::CashCardStore,
};

/// The query parameters for listing cash cards, e.g. `?page=0&size=1&sort=amount,desc`.
///
/// `sort` may be repeated to sort by more than one property.
#[derive(Debug, Default, Deserialize)]
pub struct ListCashCardsQuery {
    /// The zero-based page index, kept raw so bad values fall back to the first page.
    pub page: Option<String>,
    /// The number of cards per page, kept raw so bad values fall back to the default size.
    pub size: Option<String>,
    /// Sort orders of the form `property[,property...][,asc|desc]`.
    #[serde(default)]
    pub sort: Vec<String>,
}

/// A route handler for getting a page of the user's cash cards.
///
/// Cards are sorted by amount in ascending order unless the query says
/// otherwise. A page past the end of the user's cards is an empty list.
pub async fn list_cash_cards_endpoint<S>(
    State(state): State<CashCardState<S>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<ListCashCardsQuery>,
) -> Result<Json<Vec<CashCard>>, Error>
where
    S: CashCardStore,
{
    let page = state
        .pagination_config
        .page_request(query.page.as_deref(), query.size.as_deref(), &query.sort)?;

    state
        .store
        .find_by_owner(principal.name(), &page)
        .map(Json)
}

#[cfg(test)]
mod tests {
    use axum::{Extension, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Query;

    use crate::{
        Error,
        auth::Principal,
        cash_card::{
            CashCard, list_cash_cards_endpoint,
            list_endpoint::ListCashCardsQuery,
            test_utils::{jack, must_create_seeded_state, state},
        },
    };

    fn amounts(cards: &[CashCard]) -> Vec<f64> {
        cards.iter().map(|card| card.amount).collect()
    }

    #[tokio::test]
    async fn lists_owned_cards_by_ascending_amount() {
        let cash_cards = must_create_seeded_state();

        let got = list_cash_cards_endpoint(
            state(&cash_cards),
            Extension(jack()),
            Query(ListCashCardsQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(amounts(&got.0), vec![37.69, 123.45, 150.00]);
        assert!(got.0.iter().all(|card| card.owner == "jack1"));
    }

    #[tokio::test]
    async fn sorted_page_of_one() {
        let cash_cards = must_create_seeded_state();

        let got = list_cash_cards_endpoint(
            state(&cash_cards),
            Extension(jack()),
            Query(ListCashCardsQuery {
                page: Some("0".to_owned()),
                size: Some("1".to_owned()),
                sort: vec!["amount,desc".to_owned()],
            }),
        )
        .await
        .unwrap();

        assert_eq!(amounts(&got.0), vec![150.00]);
    }

    #[tokio::test]
    async fn bad_paging_values_fall_back_to_defaults() {
        let cash_cards = must_create_seeded_state();

        let got = list_cash_cards_endpoint(
            state(&cash_cards),
            Extension(jack()),
            Query(ListCashCardsQuery {
                page: Some("-1".to_owned()),
                size: Some("-5".to_owned()),
                sort: vec![],
            }),
        )
        .await
        .unwrap();

        assert_eq!(amounts(&got.0), vec![37.69, 123.45, 150.00]);
    }

    #[tokio::test]
    async fn user_with_no_cards_gets_empty_list() {
        let cash_cards = must_create_seeded_state();

        let got = list_cash_cards_endpoint(
            state(&cash_cards),
            Extension(Principal::new("nobody")),
            Query(ListCashCardsQuery::default()),
        )
        .await
        .unwrap();

        assert!(got.0.is_empty());
    }

    #[tokio::test]
    async fn unknown_sort_property_is_bad_request() {
        let cash_cards = must_create_seeded_state();

        let got = list_cash_cards_endpoint(
            state(&cash_cards),
            Extension(jack()),
            Query(ListCashCardsQuery {
                sort: vec!["colour".to_owned()],
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(
            got.as_ref().unwrap_err(),
            &Error::InvalidSortProperty("colour".to_owned())
        );
        assert_eq!(got.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

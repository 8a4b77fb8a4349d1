mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

#[cfg(test)]
mod test_utils;

pub use core::{CashCard, CashCardDraft, CashCardId, CashCardRequest, CashCardState};
pub use create_endpoint::create_cash_card_endpoint;
pub use delete_endpoint::delete_cash_card_endpoint;
pub use edit_endpoint::update_cash_card_endpoint;
pub use get_endpoint::get_cash_card_endpoint;
pub use list_endpoint::list_cash_cards_endpoint;

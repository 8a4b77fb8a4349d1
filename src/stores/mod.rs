//! Contains the trait and implementations for objects that store [cash cards](crate::CashCard).

mod cash_card;
mod memory;

pub mod sqlite;

pub use cash_card::CashCardStore;
pub use memory::InMemoryCashCardStore;
pub use sqlite::SQLiteCashCardStore;

//! SQLite storage implementation for the currency catalog.

mod model;
mod repository;

pub use model::{CurrencyDB, NewCurrencyDB};
pub use repository::CurrencyRepository;

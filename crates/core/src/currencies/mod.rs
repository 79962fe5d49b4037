//! Currencies module - domain models, services, and traits.

mod currencies_errors;
mod currencies_model;
mod currencies_service;
mod currencies_traits;

#[cfg(test)]
mod currencies_service_tests;

pub use currencies_errors::CurrencyError;
pub use currencies_model::{Currency, NewCurrency};
pub use currencies_service::CurrencyService;
pub use currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};

//! FX module - exchange-rate domain models, services, and traits.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;


pub use fx_errors::FxError;
pub use fx_model::{
    Conversion, CurrencyPair, ExchangeRate, ExchangeRateDetails, NewExchangeRate, DISPLAY_DECIMALS,
};
pub use fx_service::FxService;
pub use fx_traits::{FxRepositoryTrait, FxServiceTrait};

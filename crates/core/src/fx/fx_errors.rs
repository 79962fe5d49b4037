use thiserror::Error;

/// Errors for exchange-rate operations.
#[derive(Error, Debug)]
pub enum FxError {
    /// No stored rate for the ordered pair. The reverse pair is never
    /// consulted.
    #[error("Exchange rate for pair '{0}' not found")]
    RateNotFound(String),

    /// One or both codes of a pair did not resolve to a currency.
    #[error("One or both currencies of pair '{base}/{target}' do not exist")]
    PairCurrenciesNotFound { base: String, target: String },

    /// A rate for the ordered pair is already stored.
    #[error("Exchange rate for pair '{0}' already exists")]
    PairAlreadyExists(String),
}

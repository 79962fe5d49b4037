use thiserror::Error;

/// Errors for currency catalog operations.
#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("Currency '{0}' not found")]
    NotFound(String),

    #[error("Currency with code '{0}' already exists")]
    AlreadyExists(String),
}

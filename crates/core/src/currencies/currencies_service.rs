use std::sync::Arc;

use crate::errors::{DatabaseError, Error, Result};

use super::currencies_errors::CurrencyError;
use super::currencies_model::{Currency, NewCurrency};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use async_trait::async_trait;

pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        CurrencyService { repository }
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.repository.load_currencies()
    }

    fn get_currency(&self, code: &str) -> Result<Currency> {
        self.repository
            .find_by_code(code)?
            .ok_or_else(|| CurrencyError::NotFound(code.to_string()).into())
    }

    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        if self.repository.find_by_code(&new_currency.code)?.is_some() {
            return Err(CurrencyError::AlreadyExists(new_currency.code).into());
        }

        let code = new_currency.code.clone();
        match self.repository.insert_currency(new_currency).await {
            // A concurrent writer may win the insert race; the unique index
            // on `code` reports it, and the caller gets the same Conflict
            // outcome as the pre-check.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                Err(CurrencyError::AlreadyExists(code).into())
            }
            other => other,
        }
    }
}

use crate::currencies::currencies_model::{Currency, NewCurrency};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for currency repository operations.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    fn load_currencies(&self) -> Result<Vec<Currency>>;
    fn find_by_code(&self, code: &str) -> Result<Option<Currency>>;
    fn find_by_id(&self, currency_id: i32) -> Result<Option<Currency>>;
    async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
}

/// Trait for currency service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    fn get_currencies(&self) -> Result<Vec<Currency>>;
    fn get_currency(&self, code: &str) -> Result<Currency>;
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
}

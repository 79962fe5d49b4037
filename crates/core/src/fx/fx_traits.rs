use super::fx_model::{Conversion, ExchangeRate, ExchangeRateDetails, NewExchangeRate};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait defining the contract for exchange-rate repository operations.
#[async_trait]
pub trait FxRepositoryTrait: Send + Sync {
    fn load_exchange_rates(&self) -> Result<Vec<ExchangeRate>>;

    /// Looks up the rate for an ordered pair of currency ids.
    fn find_by_pair(&self, base_currency_id: i32, target_currency_id: i32)
        -> Result<Option<ExchangeRate>>;

    /// Looks up the rate for an ordered pair of currency codes with a
    /// single join against the currency table.
    fn find_by_codes(&self, base_code: &str, target_code: &str) -> Result<Option<ExchangeRate>>;

    async fn insert_exchange_rate(
        &self,
        base_currency_id: i32,
        target_currency_id: i32,
        rate: Decimal,
    ) -> Result<ExchangeRate>;

    /// Overwrites the rate value of an existing row; id and currency
    /// references are left unchanged.
    async fn update_exchange_rate(&self, rate_id: i32, rate: Decimal) -> Result<ExchangeRate>;

    async fn delete_exchange_rate(&self, rate_id: i32) -> Result<()>;
}

/// Trait defining the contract for exchange-rate service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRateDetails>>;
    fn get_exchange_rate(&self, pair: &str) -> Result<ExchangeRateDetails>;
    async fn add_exchange_rate(&self, new_rate: NewExchangeRate) -> Result<ExchangeRateDetails>;
    async fn update_exchange_rate(&self, pair: &str, rate: Decimal) -> Result<ExchangeRateDetails>;
    async fn delete_exchange_rate(&self, pair: &str) -> Result<ExchangeRateDetails>;
    fn convert(&self, base_code: &str, target_code: &str, amount: Decimal) -> Result<Conversion>;
}

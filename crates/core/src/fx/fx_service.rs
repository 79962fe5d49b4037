use std::sync::Arc;

use rust_decimal::Decimal;

use crate::currencies::{Currency, CurrencyRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};

use super::fx_errors::FxError;
use super::fx_model::{
    Conversion, CurrencyPair, ExchangeRate, ExchangeRateDetails, NewExchangeRate, DISPLAY_DECIMALS,
};
use super::fx_traits::{FxRepositoryTrait, FxServiceTrait};
use async_trait::async_trait;

pub struct FxService {
    fx_repository: Arc<dyn FxRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl FxService {
    pub fn new(
        fx_repository: Arc<dyn FxRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        FxService {
            fx_repository,
            currency_repository,
        }
    }

    /// Resolves both codes of a pair, reporting both as absent when either
    /// lookup misses.
    fn resolve_pair_currencies(&self, base: &str, target: &str) -> Result<(Currency, Currency)> {
        let base_currency = self.currency_repository.find_by_code(base)?;
        let target_currency = self.currency_repository.find_by_code(target)?;
        match (base_currency, target_currency) {
            (Some(b), Some(t)) => Ok((b, t)),
            _ => Err(FxError::PairCurrenciesNotFound {
                base: base.to_string(),
                target: target.to_string(),
            }
            .into()),
        }
    }

    /// Loads the currency a stored rate references. A miss means the
    /// foreign-key invariant is broken, which is a server fault rather
    /// than a not-found outcome.
    fn referenced_currency(&self, currency_id: i32, rate_id: i32) -> Result<Currency> {
        self.currency_repository.find_by_id(currency_id)?.ok_or_else(|| {
            Error::Unexpected(format!(
                "currency {} referenced by exchange rate {} is missing",
                currency_id, rate_id
            ))
        })
    }

    fn expand(&self, rate: &ExchangeRate) -> Result<ExchangeRateDetails> {
        let base_currency = self.referenced_currency(rate.base_currency_id, rate.id)?;
        let target_currency = self.referenced_currency(rate.target_currency_id, rate.id)?;
        Ok(ExchangeRateDetails::new(rate, base_currency, target_currency))
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn get_exchange_rates(&self) -> Result<Vec<ExchangeRateDetails>> {
        self.fx_repository
            .load_exchange_rates()?
            .iter()
            .map(|rate| self.expand(rate))
            .collect()
    }

    fn get_exchange_rate(&self, pair: &str) -> Result<ExchangeRateDetails> {
        let codes = CurrencyPair::split(pair);
        let rate = self
            .fx_repository
            .find_by_codes(&codes.base, &codes.target)?
            .ok_or_else(|| FxError::RateNotFound(pair.to_string()))?;
        self.expand(&rate)
    }

    async fn add_exchange_rate(&self, new_rate: NewExchangeRate) -> Result<ExchangeRateDetails> {
        let (base_currency, target_currency) = self.resolve_pair_currencies(
            &new_rate.base_currency_code,
            &new_rate.target_currency_code,
        )?;

        let pair = format!("{}{}", base_currency.code, target_currency.code);
        if self
            .fx_repository
            .find_by_pair(base_currency.id, target_currency.id)?
            .is_some()
        {
            return Err(FxError::PairAlreadyExists(pair).into());
        }

        let inserted = self
            .fx_repository
            .insert_exchange_rate(base_currency.id, target_currency.id, new_rate.rate)
            .await;
        match inserted {
            // Lost race against a concurrent create for the same pair.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                Err(FxError::PairAlreadyExists(pair).into())
            }
            Err(e) => Err(e),
            Ok(rate) => Ok(ExchangeRateDetails::new(&rate, base_currency, target_currency)),
        }
    }

    async fn update_exchange_rate(&self, pair: &str, rate: Decimal) -> Result<ExchangeRateDetails> {
        let codes = CurrencyPair::split(pair);
        // Currency resolution happens first so a missing currency is
        // reported distinctly from a missing rate row.
        let (base_currency, target_currency) =
            self.resolve_pair_currencies(&codes.base, &codes.target)?;

        let existing = self
            .fx_repository
            .find_by_pair(base_currency.id, target_currency.id)?
            .ok_or_else(|| FxError::RateNotFound(pair.to_string()))?;

        let updated = self.fx_repository.update_exchange_rate(existing.id, rate).await?;
        Ok(ExchangeRateDetails::new(&updated, base_currency, target_currency))
    }

    async fn delete_exchange_rate(&self, pair: &str) -> Result<ExchangeRateDetails> {
        let codes = CurrencyPair::split(pair);
        let rate = self
            .fx_repository
            .find_by_codes(&codes.base, &codes.target)?
            .ok_or_else(|| FxError::RateNotFound(pair.to_string()))?;

        let details = self.expand(&rate)?;
        self.fx_repository.delete_exchange_rate(rate.id).await?;
        // The expanded representation of the just-deleted record is the
        // caller's confirmation.
        Ok(details)
    }

    fn convert(&self, base_code: &str, target_code: &str, amount: Decimal) -> Result<Conversion> {
        let (base_currency, target_currency) =
            self.resolve_pair_currencies(base_code, target_code)?;

        let rate = self
            .fx_repository
            .find_by_pair(base_currency.id, target_currency.id)?
            .ok_or_else(|| {
                FxError::RateNotFound(format!("{}{}", base_currency.code, target_currency.code))
            })?;

        Ok(Conversion {
            base_currency,
            target_currency,
            rate: rate.rate,
            amount,
            converted_amount: (rate.rate * amount).round_dp(DISPLAY_DECIMALS),
        })
    }
}

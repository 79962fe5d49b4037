use ratehub_core::fx::{ExchangeRate, FxRepositoryTrait};
use ratehub_core::Result;
use rust_decimal::Decimal;

use super::model::{ExchangeRateDB, NewExchangeRateDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{currency, exchange_rate};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct FxRepository {
    pool: DbPool,
}

impl FxRepository {
    pub fn new(pool: DbPool) -> Self {
        FxRepository { pool }
    }
}

#[async_trait]
impl FxRepositoryTrait for FxRepository {
    fn load_exchange_rates(&self) -> Result<Vec<ExchangeRate>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = exchange_rate::table
            .load::<ExchangeRateDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ExchangeRate::from).collect())
    }

    fn find_by_pair(
        &self,
        base_currency_id: i32,
        target_currency_id: i32,
    ) -> Result<Option<ExchangeRate>> {
        let mut conn = get_connection(&self.pool)?;
        let row = exchange_rate::table
            .filter(exchange_rate::base_currency_id.eq(base_currency_id))
            .filter(exchange_rate::target_currency_id.eq(target_currency_id))
            .first::<ExchangeRateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(ExchangeRate::from))
    }

    fn find_by_codes(&self, base_code: &str, target_code: &str) -> Result<Option<ExchangeRate>> {
        let mut conn = get_connection(&self.pool)?;

        // The currency table appears twice: once for each side of the pair.
        let (base_currency, target_currency) = diesel::alias!(
            crate::schema::currency as base_currency,
            crate::schema::currency as target_currency,
        );

        let row = exchange_rate::table
            .inner_join(
                base_currency
                    .on(exchange_rate::base_currency_id.eq(base_currency.field(currency::id))),
            )
            .inner_join(
                target_currency
                    .on(exchange_rate::target_currency_id.eq(target_currency.field(currency::id))),
            )
            .filter(base_currency.field(currency::code).eq(base_code))
            .filter(target_currency.field(currency::code).eq(target_code))
            .select(ExchangeRateDB::as_select())
            .first::<ExchangeRateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(ExchangeRate::from))
    }

    async fn insert_exchange_rate(
        &self,
        base_currency_id: i32,
        target_currency_id: i32,
        rate: Decimal,
    ) -> Result<ExchangeRate> {
        let mut conn = get_connection(&self.pool)?;
        let row = conn
            .immediate_transaction::<_, StorageError, _>(|conn: &mut SqliteConnection| {
                let new_row = NewExchangeRateDB {
                    base_currency_id,
                    target_currency_id,
                    rate: rate.to_string(),
                };
                Ok(diesel::insert_into(exchange_rate::table)
                    .values(&new_row)
                    .returning(ExchangeRateDB::as_returning())
                    .get_result(conn)?)
            })
            .map_err(ratehub_core::Error::from)?;
        Ok(ExchangeRate::from(row))
    }

    async fn update_exchange_rate(&self, rate_id: i32, rate: Decimal) -> Result<ExchangeRate> {
        let mut conn = get_connection(&self.pool)?;
        let row = conn
            .immediate_transaction::<_, StorageError, _>(|conn: &mut SqliteConnection| {
                Ok(diesel::update(exchange_rate::table.find(rate_id))
                    .set(exchange_rate::rate.eq(rate.to_string()))
                    .returning(ExchangeRateDB::as_returning())
                    .get_result(conn)?)
            })
            .map_err(ratehub_core::Error::from)?;
        Ok(ExchangeRate::from(row))
    }

    async fn delete_exchange_rate(&self, rate_id: i32) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        conn.immediate_transaction::<_, StorageError, _>(|conn: &mut SqliteConnection| {
            diesel::delete(exchange_rate::table.find(rate_id)).execute(conn)?;
            Ok(())
        })
        .map_err(ratehub_core::Error::from)?;
        Ok(())
    }
}

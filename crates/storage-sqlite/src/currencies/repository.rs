use ratehub_core::currencies::{Currency, CurrencyRepositoryTrait, NewCurrency};
use ratehub_core::Result;

use super::model::{CurrencyDB, NewCurrencyDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::currency;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

pub struct CurrencyRepository {
    pool: DbPool,
}

impl CurrencyRepository {
    pub fn new(pool: DbPool) -> Self {
        CurrencyRepository { pool }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    fn load_currencies(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = currency::table
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let row = currency::table
            .filter(currency::code.eq(code))
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Currency::from))
    }

    fn find_by_id(&self, currency_id: i32) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let row = currency::table
            .find(currency_id)
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Currency::from))
    }

    async fn insert_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;
        let row = conn
            .immediate_transaction::<_, StorageError, _>(|conn: &mut SqliteConnection| {
                let new_row = NewCurrencyDB::from(new_currency);
                Ok(diesel::insert_into(currency::table)
                    .values(&new_row)
                    .returning(CurrencyDB::as_returning())
                    .get_result(conn)?)
            })
            .map_err(ratehub_core::Error::from)?;
        Ok(Currency::from(row))
    }
}

//! Database models for exchange rates.
//!
//! The rate column is stored as TEXT so the full decimal precision written
//! by the service survives the round trip.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ratehub_core::fx::ExchangeRate;

/// Parses a stored rate, falling back to zero on corrupt data. Rates are
/// only ever written by this crate, so a parse failure means the row was
/// tampered with outside the service.
fn parse_rate(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| {
        log::error!("Invalid decimal '{}' in exchange_rate.rate: {}", value, e);
        Decimal::ZERO
    })
}

/// Database row for an exchange rate.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rate)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExchangeRateDB {
    pub id: i32,
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
}

/// Insertable row for a new exchange rate; the id is assigned by the
/// database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::exchange_rate)]
pub struct NewExchangeRateDB {
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: String,
}

impl From<ExchangeRateDB> for ExchangeRate {
    fn from(db: ExchangeRateDB) -> Self {
        Self {
            id: db.id,
            base_currency_id: db.base_currency_id,
            target_currency_id: db.target_currency_id,
            rate: parse_rate(&db.rate),
        }
    }
}

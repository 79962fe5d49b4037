//! Database models for currencies.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use ratehub_core::currencies::{Currency, NewCurrency};

/// Database row for a currency.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::currency)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CurrencyDB {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub sign: String,
}

/// Insertable row for a new currency; the id is assigned by the database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::currency)]
pub struct NewCurrencyDB {
    pub code: String,
    pub name: String,
    pub sign: String,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            id: db.id,
            code: db.code,
            name: db.name,
            sign: db.sign,
        }
    }
}

impl From<NewCurrency> for NewCurrencyDB {
    fn from(domain: NewCurrency) -> Self {
        Self {
            code: domain.code,
            name: domain.name,
            sign: domain.sign,
        }
    }
}

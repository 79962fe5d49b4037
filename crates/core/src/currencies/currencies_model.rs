use serde::{Deserialize, Serialize};

/// A catalog currency. Created once via the create endpoint, never
/// updated or deleted afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub sign: String,
}

/// Payload for creating a new currency.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewCurrency {
    pub name: String,
    pub code: String,
    pub sign: String,
}

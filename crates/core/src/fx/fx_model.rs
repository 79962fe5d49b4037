use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currencies::Currency;

/// Number of decimal places used for display rounding of rates and
/// converted amounts. Rounding is `round_dp`, i.e. half-to-even.
pub const DISPLAY_DECIMALS: u32 = 2;

/// A directional exchange rate as stored: base -> target. The reverse
/// direction is a separate, independently stored record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub id: i32,
    pub base_currency_id: i32,
    pub target_currency_id: i32,
    pub rate: Decimal,
}

/// Payload for creating a new exchange rate.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExchangeRate {
    pub base_currency_code: String,
    pub target_currency_code: String,
    pub rate: Decimal,
}

/// An exchange rate with its currency foreign keys replaced by the full
/// embedded currency records, and the rate rounded for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeRateDetails {
    pub id: i32,
    pub rate: Decimal,
    pub base_currency: Currency,
    pub target_currency: Currency,
}

impl ExchangeRateDetails {
    pub fn new(rate: &ExchangeRate, base_currency: Currency, target_currency: Currency) -> Self {
        ExchangeRateDetails {
            id: rate.id,
            rate: rate.rate.round_dp(DISPLAY_DECIMALS),
            base_currency,
            target_currency,
        }
    }
}

/// Result of converting an amount between two currencies. Unlike the rate
/// responses, `rate` here carries the full stored precision; only
/// `converted_amount` is rounded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversion {
    pub base_currency: Currency,
    pub target_currency: Currency,
    pub rate: Decimal,
    pub amount: Decimal,
    pub converted_amount: Decimal,
}

/// A pair code split into its base and target currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub base: String,
    pub target: String,
}

impl CurrencyPair {
    /// Splits a pair code such as `"USDEUR"` into base `"USD"` and target
    /// `"EUR"`: the first three bytes and everything after them.
    ///
    /// Deliberately permissive: inputs shorter than three characters keep
    /// the whole string as the base code with an empty target, and an
    /// input that cannot be split at a character boundary is kept whole.
    /// Malformed pairs fail the subsequent currency lookup instead.
    pub fn split(pair: &str) -> Self {
        match (pair.get(..3), pair.get(3..)) {
            (Some(base), Some(target)) => CurrencyPair {
                base: base.to_string(),
                target: target.to_string(),
            },
            _ => CurrencyPair {
                base: pair.to_string(),
                target: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn split_takes_first_three_bytes_as_base() {
        let pair = CurrencyPair::split("USDEUR");
        assert_eq!(pair.base, "USD");
        assert_eq!(pair.target, "EUR");
    }

    #[test]
    fn split_keeps_short_input_as_base() {
        let pair = CurrencyPair::split("US");
        assert_eq!(pair.base, "US");
        assert_eq!(pair.target, "");
    }

    #[test]
    fn split_keeps_overlong_target() {
        let pair = CurrencyPair::split("USDEURX");
        assert_eq!(pair.base, "USD");
        assert_eq!(pair.target, "EURX");
    }

    #[test]
    fn split_keeps_non_boundary_input_whole() {
        let pair = CurrencyPair::split("ééé");
        assert_eq!(pair.base, "ééé");
        assert_eq!(pair.target, "");
    }

    #[test]
    fn details_round_rate_to_two_decimals() {
        let rate = ExchangeRate {
            id: 1,
            base_currency_id: 1,
            target_currency_id: 2,
            rate: dec!(1.2345),
        };
        let base = Currency {
            id: 1,
            code: "USD".into(),
            name: "US Dollar".into(),
            sign: "$".into(),
        };
        let target = Currency {
            id: 2,
            code: "EUR".into(),
            name: "Euro".into(),
            sign: "€".into(),
        };
        let details = ExchangeRateDetails::new(&rate, base, target);
        assert_eq!(details.rate, dec!(1.23));
    }
}

//! Market snapshot domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest trading data of a bond. One live row per bond, overwritten on each fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub bond_id: i64,
    pub time: NaiveDateTime,
    pub face_value: Option<Decimal>,
    pub currency: Option<String>,
    pub last: Option<Decimal>,
    pub last_change: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub legal_close_price: Option<Decimal>,
    pub accrued_interest: Option<Decimal>,
}

impl MarketSnapshot {
    /// Best available clean price, in percent of face value:
    /// last trade, else close, else legal close.
    pub fn price(&self) -> Option<Decimal> {
        self.last.or(self.close_price).or(self.legal_close_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_fallback() {
        let mut snapshot = MarketSnapshot {
            bond_id: 1,
            time: chrono::NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(18, 45, 0)
                .unwrap(),
            face_value: Some(dec!(1000)),
            currency: Some("RUB".into()),
            last: None,
            last_change: None,
            close_price: None,
            legal_close_price: Some(dec!(98.1)),
            accrued_interest: Some(dec!(1.2)),
        };
        assert_eq!(snapshot.price(), Some(dec!(98.1)));

        snapshot.close_price = Some(dec!(98.5));
        assert_eq!(snapshot.price(), Some(dec!(98.5)));

        snapshot.last = Some(dec!(99));
        assert_eq!(snapshot.price(), Some(dec!(99)));
    }
}

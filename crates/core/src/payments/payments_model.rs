//! Payment domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Kind of a scheduled bond payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "C")]
    Coupon,
    #[serde(rename = "A")]
    Amortization,
    #[serde(rename = "M")]
    Maturity,
    /// Payments recorded against offers by older data sets
    #[serde(rename = "O")]
    Offer,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Coupon => "C",
            PaymentType::Amortization => "A",
            PaymentType::Maturity => "M",
            PaymentType::Offer => "O",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(PaymentType::Coupon),
            "A" => Ok(PaymentType::Amortization),
            "M" => Ok(PaymentType::Maturity),
            "O" => Ok(PaymentType::Offer),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown payment type \"{}\"",
                other
            )))),
        }
    }
}

/// Domain model representing a scheduled payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub bond_id: i64,
    pub payment_type: PaymentType,
    pub date: NaiveDate,
    pub value: Decimal,
    pub value_percent: Decimal,
    pub value_rub: Decimal,
    pub record_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

/// Input model for recording a payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub bond_id: i64,
    pub payment_type: PaymentType,
    pub date: NaiveDate,
    pub value: Decimal,
    pub value_percent: Decimal,
    pub value_rub: Decimal,
    pub record_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_type_codes() {
        assert_eq!(serde_json::to_string(&PaymentType::Maturity).unwrap(), "\"M\"");
        assert_eq!("A".parse::<PaymentType>().unwrap(), PaymentType::Amortization);
        assert!("X".parse::<PaymentType>().is_err());
    }
}

//! Offer (put/call option) domain models.

use std::fmt;

use bond_recommender_exchange::OfferType as ExchangeOfferType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Offer kind and outcome
///
/// Stored as a snake_case code. Exchange labels outside the known vocabulary
/// are kept as is in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OfferType {
    Offer,
    CompletedOffer,
    CanceledOffer,
    DefaultOffer,
    TechDefaultOffer,
    Maturity,
    CanceledMaturity,
    Other(String),
}

impl OfferType {
    pub fn as_str(&self) -> &str {
        match self {
            OfferType::Offer => "offer",
            OfferType::CompletedOffer => "completed_offer",
            OfferType::CanceledOffer => "canceled_offer",
            OfferType::DefaultOffer => "default_offer",
            OfferType::TechDefaultOffer => "tech_default_offer",
            OfferType::Maturity => "maturity",
            OfferType::CanceledMaturity => "canceled_maturity",
            OfferType::Other(label) => label,
        }
    }
}

impl From<ExchangeOfferType> for OfferType {
    fn from(value: ExchangeOfferType) -> Self {
        match value {
            ExchangeOfferType::Offer => OfferType::Offer,
            ExchangeOfferType::CompletedOffer => OfferType::CompletedOffer,
            ExchangeOfferType::CanceledOffer => OfferType::CanceledOffer,
            ExchangeOfferType::DefaultOffer => OfferType::DefaultOffer,
            ExchangeOfferType::TechDefaultOffer => OfferType::TechDefaultOffer,
            ExchangeOfferType::Maturity => OfferType::Maturity,
            ExchangeOfferType::CanceledMaturity => OfferType::CanceledMaturity,
            ExchangeOfferType::Other(label) => OfferType::Other(label),
        }
    }
}

impl From<String> for OfferType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "offer" => OfferType::Offer,
            "completed_offer" => OfferType::CompletedOffer,
            "canceled_offer" => OfferType::CanceledOffer,
            "default_offer" => OfferType::DefaultOffer,
            "tech_default_offer" => OfferType::TechDefaultOffer,
            "maturity" => OfferType::Maturity,
            "canceled_maturity" => OfferType::CanceledMaturity,
            _ => OfferType::Other(code),
        }
    }
}

impl From<OfferType> for String {
    fn from(value: OfferType) -> Self {
        match value {
            OfferType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing a bond offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub bond_id: i64,
    pub issue_value: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub face_value: Option<Decimal>,
    pub face_unit: Option<String>,
    pub price: Option<Decimal>,
    pub value: Option<Decimal>,
    pub agent: Option<String>,
    pub offer_type: Option<OfferType>,
}

/// Input model for recording an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub bond_id: i64,
    pub issue_value: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub face_value: Option<Decimal>,
    pub face_unit: Option<String>,
    pub price: Option<Decimal>,
    pub value: Option<Decimal>,
    pub agent: Option<String>,
    pub offer_type: Option<OfferType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_type_codes() {
        assert_eq!(OfferType::from("completed_offer".to_string()), OfferType::CompletedOffer);
        assert_eq!(OfferType::CompletedOffer.as_str(), "completed_offer");

        let other = OfferType::from(ExchangeOfferType::Other("Оферта (новая)".into()));
        assert_eq!(other.as_str(), "Оферта (новая)");
        assert_eq!(OfferType::from(String::from(other.clone())), other);
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Оферта (новая)\"");
    }
}

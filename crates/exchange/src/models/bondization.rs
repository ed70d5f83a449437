//! Rows of the bondization statistics endpoint: coupons, amortizations and offers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::dates::{nullable_date, null_as_default};

#[derive(Debug, Clone, Deserialize)]
pub struct Coupon {
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "issuevalue", default)]
    pub issue_value: Option<Decimal>,
    #[serde(rename = "coupondate", default, deserialize_with = "nullable_date")]
    pub coupon_date: Option<NaiveDate>,
    #[serde(rename = "recorddate", default, deserialize_with = "nullable_date")]
    pub record_date: Option<NaiveDate>,
    #[serde(rename = "startdate", default, deserialize_with = "nullable_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "initialfacevalue", default)]
    pub initial_face_value: Option<Decimal>,
    #[serde(rename = "facevalue", default)]
    pub face_value: Option<Decimal>,
    #[serde(rename = "faceunit", default)]
    pub face_unit: Option<String>,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(rename = "valueprc", default)]
    pub value_percent: Option<Decimal>,
    #[serde(default)]
    pub value_rub: Option<Decimal>,
}

impl Coupon {
    /// Payment date: coupon date, else start date, else record date.
    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.coupon_date.or(self.start_date).or(self.record_date)
    }
}

/// Whether an amortization row is a partial repayment or the final maturity.
///
/// Only `"maturity"` marks the final repayment; any other source, or none,
/// is an amortization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmortizationSource {
    #[default]
    Amortization,
    Maturity,
}

impl<'de> Deserialize<'de> for AmortizationSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            Some("maturity") => AmortizationSource::Maturity,
            _ => AmortizationSource::Amortization,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Amortization {
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "issuevalue", default)]
    pub issue_value: Option<Decimal>,
    #[serde(rename = "amortdate", default, deserialize_with = "nullable_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "initialfacevalue", default)]
    pub initial_face_value: Option<Decimal>,
    #[serde(rename = "facevalue", default)]
    pub face_value: Option<Decimal>,
    #[serde(rename = "faceunit", default)]
    pub face_unit: Option<String>,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(rename = "valueprc", default)]
    pub value_percent: Option<Decimal>,
    #[serde(default)]
    pub value_rub: Option<Decimal>,
    #[serde(default)]
    pub data_source: AmortizationSource,
}

/// Offer kind, mapped from the exchange's Russian vocabulary.
///
/// Labels outside the known vocabulary are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
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

impl From<String> for OfferType {
    fn from(label: String) -> Self {
        match label.trim() {
            "Оферта" => OfferType::Offer,
            "Оферта (состоялось)" => OfferType::CompletedOffer,
            "Оферта (отменено)" => OfferType::CanceledOffer,
            "Оферта (дефолт)" => OfferType::DefaultOffer,
            "Оферта (технический дефолт)" => OfferType::TechDefaultOffer,
            "Оферта/Погашение" => OfferType::Maturity,
            "Оферта/Погашение(отменено)" => OfferType::CanceledMaturity,
            _ => OfferType::Other(label),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "issuevalue", default)]
    pub issue_value: Option<Decimal>,
    #[serde(rename = "offerdate", default, deserialize_with = "nullable_date")]
    pub offer_date: Option<NaiveDate>,
    #[serde(rename = "offerdatestart", default, deserialize_with = "nullable_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "offerdateend", default, deserialize_with = "nullable_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "facevalue", default)]
    pub face_value: Option<Decimal>,
    #[serde(rename = "faceunit", default)]
    pub face_unit: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(rename = "offertype", default)]
    pub offer_type: Option<OfferType>,
}

impl Offer {
    /// Representative date: offer date, else window start, else window end.
    pub fn representative_date(&self) -> Option<NaiveDate> {
        self.offer_date.or(self.start_date).or(self.end_date)
    }
}

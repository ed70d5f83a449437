//! Bond domain models.

use std::fmt;
use std::str::FromStr;

use bond_recommender_exchange::SecurityType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Kind of a bond as classified by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondType {
    SubfederalBond,
    OfzBond,
    ExchangeBond,
    CbBond,
    MunicipalBond,
    CorporateBond,
    IfiBond,
    EuroBond,
}

impl BondType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BondType::SubfederalBond => "subfederal_bond",
            BondType::OfzBond => "ofz_bond",
            BondType::ExchangeBond => "exchange_bond",
            BondType::CbBond => "cb_bond",
            BondType::MunicipalBond => "municipal_bond",
            BondType::CorporateBond => "corporate_bond",
            BondType::IfiBond => "ifi_bond",
            BondType::EuroBond => "euro_bond",
        }
    }

    /// Maps an exchange security type. Non-bond types have no counterpart.
    pub fn from_security_type(security_type: SecurityType) -> Option<Self> {
        match security_type {
            SecurityType::SubfederalBond => Some(BondType::SubfederalBond),
            SecurityType::OfzBond => Some(BondType::OfzBond),
            SecurityType::ExchangeBond => Some(BondType::ExchangeBond),
            SecurityType::CbBond => Some(BondType::CbBond),
            SecurityType::MunicipalBond => Some(BondType::MunicipalBond),
            SecurityType::CorporateBond => Some(BondType::CorporateBond),
            SecurityType::IfiBond => Some(BondType::IfiBond),
            SecurityType::EuroBond => Some(BondType::EuroBond),
            SecurityType::Other => None,
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BondType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subfederal_bond" => Ok(BondType::SubfederalBond),
            "ofz_bond" => Ok(BondType::OfzBond),
            "exchange_bond" => Ok(BondType::ExchangeBond),
            "cb_bond" => Ok(BondType::CbBond),
            "municipal_bond" => Ok(BondType::MunicipalBond),
            "corporate_bond" => Ok(BondType::CorporateBond),
            "ifi_bond" => Ok(BondType::IfiBond),
            "euro_bond" => Ok(BondType::EuroBond),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "unknown bond type \"{}\"",
                other
            )))),
        }
    }
}

/// Domain model representing a bond
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bond {
    pub id: i64,
    pub issuer_id: i64,
    pub moex_id: i64,
    pub security_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    pub is_traded: bool,
    pub qualified_only: bool,
    pub high_risk: bool,
    pub bond_type: BondType,
    pub primary_board_id: String,
    pub market_price_board_id: String,
    pub initial_face_value: Decimal,
    pub face_unit: String,
    pub issue_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub listing_level: i32,
    pub coupon_frequency: i32,
}

/// Input model for registering a bond
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBond {
    pub issuer_id: i64,
    pub moex_id: i64,
    pub security_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    pub is_traded: bool,
    pub qualified_only: bool,
    pub high_risk: bool,
    pub bond_type: BondType,
    pub primary_board_id: String,
    pub market_price_board_id: String,
    pub initial_face_value: Decimal,
    pub face_unit: String,
    pub issue_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub listing_level: i32,
    pub coupon_frequency: i32,
}

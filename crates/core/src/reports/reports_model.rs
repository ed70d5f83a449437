//! Report domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bonds::Bond;
use crate::issuers::Issuer;
use crate::market_data::MarketSnapshot;
use crate::payments::PaymentType;

/// A future payment of a bond, in roubles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowItem {
    pub bond_id: i64,
    pub payment_type: PaymentType,
    pub date: NaiveDate,
    pub value_rub: Decimal,
}

/// Buy-and-hold economics of one bond bought today and held to maturity.
///
/// Monetary values are per bond, in the report currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub bond_id: i64,
    pub days_till_maturity: i64,
    pub currency: String,
    /// Clean price, in percent of face value
    pub open_price: Decimal,
    pub open_accrued_interest: Decimal,
    pub open_face_value: Decimal,
    pub open_fee: Decimal,
    pub open_value: Decimal,
    pub coupon_payments: Decimal,
    pub amortization_payments: Decimal,
    pub maturity_payment: Decimal,
    pub taxes: Decimal,
    pub revenue: Decimal,
    pub profit_loss: Decimal,
    /// Percent of the open value
    pub relative_profit_loss: Decimal,
    /// Annualized, percent
    pub interest_rate: Decimal,
}

/// Everything known about a reported bond, as served to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BondReport {
    pub bond: Bond,
    pub issuer: Issuer,
    pub market_data: MarketSnapshot,
    pub report: Report,
    pub cash_flow: Vec<CashFlowItem>,
}

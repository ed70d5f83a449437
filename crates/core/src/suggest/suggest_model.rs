//! Portfolio suggestion models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collections::Duration;
use crate::reports::BondReport;

/// One weighted slice of a requested portfolio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPart {
    pub collection_id: String,
    pub weight: Decimal,
}

/// Request for a portfolio suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    /// Amount to invest, RUB
    pub amount: Decimal,
    pub max_duration: Duration,
    /// Collection weights. Without parts the whole amount goes to the global candidate set.
    #[serde(default)]
    pub parts: Option<Vec<SuggestPart>>,
}

/// A bought quantity of one bond. Report money fields and cash flow are totals for the lot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(flatten)]
    pub report: BondReport,
    pub quantity: i64,
    /// Share of the portfolio open value, 0..1
    pub weight: Decimal,
}

/// A suggested portfolio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResult {
    pub positions: Vec<Position>,
    /// Total open value
    pub amount: Decimal,
    /// Days until the last position matures
    pub duration_days: i64,
    pub profit_loss: Decimal,
    pub relative_profit_loss: Decimal,
    pub interest_rate: Decimal,
}

impl BondReport {
    /// Scales the per-bond money fields and cash flow to a lot of `quantity` bonds.
    pub fn scaled(mut self, quantity: i64) -> Self {
        let q = Decimal::from(quantity);
        let r = &mut self.report;
        r.open_fee *= q;
        r.open_value *= q;
        r.coupon_payments *= q;
        r.amortization_payments *= q;
        r.maturity_payment *= q;
        r.taxes *= q;
        r.revenue *= q;
        r.profit_loss *= q;
        for item in &mut self.cash_flow {
            item.value_rub *= q;
        }
        self
    }
}

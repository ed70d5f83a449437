//! Database models for cash flows and reports.

use bond_recommender_core::reports::{CashFlowItem, Report};
use bond_recommender_core::Result;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::utils::{parse_code, parse_decimal};

/// Database model for projected cash flow rows
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_flows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashFlowDB {
    pub id: i64,
    pub bond_id: i64,
    pub payment_type: String,
    pub date: NaiveDate,
    pub value_rub: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_flows)]
pub struct NewCashFlowDB {
    pub bond_id: i64,
    pub payment_type: String,
    pub date: NaiveDate,
    pub value_rub: String,
}

impl From<&CashFlowItem> for NewCashFlowDB {
    fn from(item: &CashFlowItem) -> Self {
        Self {
            bond_id: item.bond_id,
            payment_type: item.payment_type.as_str().to_string(),
            date: item.date,
            value_rub: item.value_rub.to_string(),
        }
    }
}

impl TryFrom<CashFlowDB> for CashFlowItem {
    type Error = bond_recommender_core::Error;

    fn try_from(db: CashFlowDB) -> Result<Self> {
        Ok(Self {
            bond_id: db.bond_id,
            payment_type: parse_code("payment_type", &db.payment_type)?,
            date: db.date,
            value_rub: parse_decimal("value_rub", &db.value_rub)?,
        })
    }
}

/// Database model for reports, one row per reported bond
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::reports)]
#[diesel(primary_key(bond_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReportDB {
    pub bond_id: i64,
    pub days_till_maturity: i64,
    pub currency: String,
    pub open_price: String,
    pub open_accrued_interest: String,
    pub open_face_value: String,
    pub open_fee: String,
    pub open_value: String,
    pub coupon_payments: String,
    pub amortization_payments: String,
    pub maturity_payment: String,
    pub taxes: String,
    pub revenue: String,
    pub profit_loss: String,
    pub relative_profit_loss: String,
    pub interest_rate: String,
}

impl From<&Report> for ReportDB {
    fn from(report: &Report) -> Self {
        Self {
            bond_id: report.bond_id,
            days_till_maturity: report.days_till_maturity,
            currency: report.currency.clone(),
            open_price: report.open_price.to_string(),
            open_accrued_interest: report.open_accrued_interest.to_string(),
            open_face_value: report.open_face_value.to_string(),
            open_fee: report.open_fee.to_string(),
            open_value: report.open_value.to_string(),
            coupon_payments: report.coupon_payments.to_string(),
            amortization_payments: report.amortization_payments.to_string(),
            maturity_payment: report.maturity_payment.to_string(),
            taxes: report.taxes.to_string(),
            revenue: report.revenue.to_string(),
            profit_loss: report.profit_loss.to_string(),
            relative_profit_loss: report.relative_profit_loss.to_string(),
            interest_rate: report.interest_rate.to_string(),
        }
    }
}

impl TryFrom<ReportDB> for Report {
    type Error = bond_recommender_core::Error;

    fn try_from(db: ReportDB) -> Result<Self> {
        Ok(Self {
            bond_id: db.bond_id,
            days_till_maturity: db.days_till_maturity,
            currency: db.currency,
            open_price: parse_decimal("open_price", &db.open_price)?,
            open_accrued_interest: parse_decimal(
                "open_accrued_interest",
                &db.open_accrued_interest,
            )?,
            open_face_value: parse_decimal("open_face_value", &db.open_face_value)?,
            open_fee: parse_decimal("open_fee", &db.open_fee)?,
            open_value: parse_decimal("open_value", &db.open_value)?,
            coupon_payments: parse_decimal("coupon_payments", &db.coupon_payments)?,
            amortization_payments: parse_decimal(
                "amortization_payments",
                &db.amortization_payments,
            )?,
            maturity_payment: parse_decimal("maturity_payment", &db.maturity_payment)?,
            taxes: parse_decimal("taxes", &db.taxes)?,
            revenue: parse_decimal("revenue", &db.revenue)?,
            profit_loss: parse_decimal("profit_loss", &db.profit_loss)?,
            relative_profit_loss: parse_decimal(
                "relative_profit_loss",
                &db.relative_profit_loss,
            )?,
            interest_rate: parse_decimal("interest_rate", &db.interest_rate)?,
        })
    }
}

//! Database models for payments.

use bond_recommender_core::payments::{NewPayment, Payment};
use bond_recommender_core::Result;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::utils::{parse_code, parse_decimal};

/// Database model for payments
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentDB {
    pub id: i64,
    pub bond_id: i64,
    pub payment_type: String,
    pub date: NaiveDate,
    pub value: String,
    pub value_percent: String,
    pub value_rub: String,
    pub record_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

/// Database model for creating a new payment
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPaymentDB {
    pub bond_id: i64,
    pub payment_type: String,
    pub date: NaiveDate,
    pub value: String,
    pub value_percent: String,
    pub value_rub: String,
    pub record_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

impl From<NewPayment> for NewPaymentDB {
    fn from(domain: NewPayment) -> Self {
        Self {
            bond_id: domain.bond_id,
            payment_type: domain.payment_type.as_str().to_string(),
            date: domain.date,
            value: domain.value.to_string(),
            value_percent: domain.value_percent.to_string(),
            value_rub: domain.value_rub.to_string(),
            record_date: domain.record_date,
            start_date: domain.start_date,
        }
    }
}

impl TryFrom<PaymentDB> for Payment {
    type Error = bond_recommender_core::Error;

    fn try_from(db: PaymentDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            bond_id: db.bond_id,
            payment_type: parse_code("payment_type", &db.payment_type)?,
            date: db.date,
            value: parse_decimal("value", &db.value)?,
            value_percent: parse_decimal("value_percent", &db.value_percent)?,
            value_rub: parse_decimal("value_rub", &db.value_rub)?,
            record_date: db.record_date,
            start_date: db.start_date,
        })
    }
}

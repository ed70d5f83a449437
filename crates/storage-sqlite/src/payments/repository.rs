use bond_recommender_core::payments::{
    NewPayment, Payment, PaymentRepositoryTrait, PaymentType,
};
use bond_recommender_core::Result;
use chrono::NaiveDate;
use diesel::dsl::max;
use diesel::prelude::*;

use super::model::{NewPaymentDB, PaymentDB};
use crate::errors::IntoCore;
use crate::schema::payments;
use crate::store::SqliteTx;

fn to_payments(rows: Vec<PaymentDB>) -> Result<Vec<Payment>> {
    rows.into_iter().map(Payment::try_from).collect()
}

impl PaymentRepositoryTrait for SqliteTx {
    fn last_payment_date(&mut self, payment_type: PaymentType) -> Result<Option<NaiveDate>> {
        payments::table
            .filter(payments::payment_type.eq(payment_type.as_str()))
            .select(max(payments::date))
            .first(self.conn())
            .into_core()
    }

    fn list_payments(&mut self) -> Result<Vec<Payment>> {
        let rows = payments::table
            .order((payments::bond_id.asc(), payments::date.asc(), payments::payment_type.asc()))
            .select(PaymentDB::as_select())
            .load(self.conn())
            .into_core()?;
        to_payments(rows)
    }

    fn list_bond_payments(&mut self, bond_id: i64) -> Result<Vec<Payment>> {
        let rows = payments::table
            .filter(payments::bond_id.eq(bond_id))
            .order((payments::date.asc(), payments::payment_type.asc()))
            .select(PaymentDB::as_select())
            .load(self.conn())
            .into_core()?;
        to_payments(rows)
    }

    fn create_payment(&mut self, new_payment: NewPayment) -> Result<Payment> {
        let row: NewPaymentDB = new_payment.into();
        let created = diesel::insert_into(payments::table)
            .values(&row)
            .returning(PaymentDB::as_returning())
            .get_result(self.conn())
            .into_core()?;
        Payment::try_from(created)
    }
}

use chrono::NaiveDate;

use crate::errors::Result;
use crate::payments::payments_model::{NewPayment, Payment, PaymentType};

/// Payment operations inside a store transaction
pub trait PaymentRepositoryTrait {
    /// Date of the latest stored payment of the given type, if any.
    fn last_payment_date(&mut self, payment_type: PaymentType) -> Result<Option<NaiveDate>>;
    fn list_payments(&mut self) -> Result<Vec<Payment>>;
    fn list_bond_payments(&mut self, bond_id: i64) -> Result<Vec<Payment>>;
    /// Fails with `DatabaseError::UniqueViolation` on a duplicate `(bond, date, type)`.
    fn create_payment(&mut self, new_payment: NewPayment) -> Result<Payment>;
}

//! Payments module - coupons, amortizations and maturities.

mod payments_model;
mod payments_traits;

pub use payments_model::{NewPayment, Payment, PaymentType};
pub use payments_traits::PaymentRepositoryTrait;

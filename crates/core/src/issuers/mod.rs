//! Issuers module - domain models and repository trait.

mod issuers_model;
mod issuers_traits;

pub use issuers_model::{Issuer, NewIssuer};
pub use issuers_traits::IssuerRepositoryTrait;

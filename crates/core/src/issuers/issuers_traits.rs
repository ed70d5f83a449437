use crate::errors::Result;
use crate::issuers::issuers_model::{Issuer, NewIssuer};

/// Issuer operations inside a store transaction
pub trait IssuerRepositoryTrait {
    /// Fails with `DatabaseError::NotFound` when no issuer has this exchange id.
    fn get_issuer_by_moex_id(&mut self, moex_id: i64) -> Result<Issuer>;
    fn get_issuer(&mut self, id: i64) -> Result<Issuer>;
    fn list_issuers(&mut self) -> Result<Vec<Issuer>>;
    /// Fails with `DatabaseError::UniqueViolation` on a duplicate exchange id.
    fn create_issuer(&mut self, new_issuer: NewIssuer) -> Result<Issuer>;
}

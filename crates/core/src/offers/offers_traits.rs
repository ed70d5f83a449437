use crate::errors::Result;
use crate::offers::offers_model::{NewOffer, Offer};

/// Offer operations inside a store transaction
pub trait OfferRepositoryTrait {
    fn list_bond_offers(&mut self, bond_id: i64) -> Result<Vec<Offer>>;
    /// Fails with `DatabaseError::UniqueViolation` on a duplicate
    /// `(bond, date, start date, end date)`.
    fn create_offer(&mut self, new_offer: NewOffer) -> Result<Offer>;
}

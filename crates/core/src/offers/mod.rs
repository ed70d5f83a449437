//! Offers module - bond put/call offers.

mod offers_model;
mod offers_traits;

pub use offers_model::{NewOffer, Offer, OfferType};
pub use offers_traits::OfferRepositoryTrait;

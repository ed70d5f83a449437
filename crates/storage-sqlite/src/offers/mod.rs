mod model;
mod repository;

pub use model::{NewOfferDB, OfferDB};

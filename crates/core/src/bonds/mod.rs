//! Bonds module - domain models and repository trait.

mod bonds_model;
mod bonds_traits;

pub use bonds_model::{Bond, BondType, NewBond};
pub use bonds_traits::BondRepositoryTrait;

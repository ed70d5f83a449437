mod model;
mod repository;

pub use model::{search_key, BondDB, NewBondDB};

mod model;
mod repository;

pub use model::CollectionBondDB;

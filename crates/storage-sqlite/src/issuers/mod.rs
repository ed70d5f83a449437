mod model;
mod repository;

pub use model::{IssuerDB, NewIssuerDB};

//! Bond Recommender Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the bond recommender: fetching
//! exchange data, projecting cash flows, computing reports, ranking
//! collections and suggesting portfolios. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod bonds;
pub mod collections;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod issuers;
pub mod market_data;
pub mod offers;
pub mod payments;
pub mod recommender;
pub mod reports;
pub mod search;
pub mod store;
pub mod suggest;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

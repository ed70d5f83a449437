//! Recommender module - rebuilds derived data and serves bond reports and collections.

mod recommender_service;

pub use recommender_service::{load_bond_report, RecommenderService};

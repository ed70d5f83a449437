//! Collections module - named bond filters ranked by interest rate.

mod collections_classifier;
mod collections_model;
mod collections_registry;
mod collections_traits;

pub use collections_classifier::{
    candidates, classify, rank_by_rate, reject_outliers, Candidate,
};
pub use collections_model::{Collection, CollectionBond, CollectionListing, Duration};
pub use collections_registry::{CollectionDefinition, CollectionPredicate, CollectionRegistry};
pub use collections_traits::CollectionRepositoryTrait;

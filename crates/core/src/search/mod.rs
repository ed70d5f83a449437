//! Search module - free-text bond lookup.

mod search_model;
mod search_service;
mod search_traits;

pub use search_model::SearchResult;
pub use search_service::{normalize_query, SearchService};
pub use search_traits::SearchRepositoryTrait;

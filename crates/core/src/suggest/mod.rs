//! Suggest module - greedy portfolio allocation across weighted collections.

mod suggest_engine;
mod suggest_model;
mod suggest_service;

pub use suggest_engine::{
    allocate, build_result, maturity_window, normalize_parts, part_budget,
    select_collection_candidates, select_global_candidates, Lot,
};
pub use suggest_model::{Position, SuggestPart, SuggestRequest, SuggestResult};
pub use suggest_service::SuggestService;

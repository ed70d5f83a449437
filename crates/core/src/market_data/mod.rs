//! Market data module - live per-bond trading snapshots.

mod market_data_model;
mod market_data_traits;

pub use market_data_model::MarketSnapshot;
pub use market_data_traits::MarketDataRepositoryTrait;

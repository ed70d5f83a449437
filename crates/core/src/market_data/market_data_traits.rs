use crate::errors::Result;
use crate::market_data::market_data_model::MarketSnapshot;

/// Market snapshot operations inside a store transaction
pub trait MarketDataRepositoryTrait {
    fn get_market_data(&mut self, bond_id: i64) -> Result<MarketSnapshot>;
    fn list_market_data(&mut self) -> Result<Vec<MarketSnapshot>>;
    /// Inserts or overwrites the snapshot of `snapshot.bond_id`.
    fn upsert_market_data(&mut self, snapshot: MarketSnapshot) -> Result<()>;
}

use bond_recommender_core::market_data::{MarketDataRepositoryTrait, MarketSnapshot};
use bond_recommender_core::Result;
use diesel::prelude::*;

use super::model::MarketDataDB;
use crate::errors::IntoCore;
use crate::schema::market_data;
use crate::store::SqliteTx;

impl MarketDataRepositoryTrait for SqliteTx {
    fn get_market_data(&mut self, bond_id: i64) -> Result<MarketSnapshot> {
        let row = market_data::table
            .find(bond_id)
            .select(MarketDataDB::as_select())
            .first(self.conn())
            .into_core()?;
        MarketSnapshot::try_from(row)
    }

    fn list_market_data(&mut self) -> Result<Vec<MarketSnapshot>> {
        let rows = market_data::table
            .order(market_data::bond_id.asc())
            .select(MarketDataDB::as_select())
            .load(self.conn())
            .into_core()?;
        rows.into_iter().map(MarketSnapshot::try_from).collect()
    }

    fn upsert_market_data(&mut self, snapshot: MarketSnapshot) -> Result<()> {
        let row: MarketDataDB = snapshot.into();
        diesel::insert_into(market_data::table)
            .values(&row)
            .on_conflict(market_data::bond_id)
            .do_update()
            .set(&row)
            .execute(self.conn())
            .into_core()?;
        Ok(())
    }
}

use bond_recommender_core::collections::{CollectionBond, CollectionRepositoryTrait, Duration};
use bond_recommender_core::Result;
use diesel::prelude::*;

use super::model::CollectionBondDB;
use crate::errors::IntoCore;
use crate::schema::collection_bonds;
use crate::store::SqliteTx;
use crate::utils::chunk_for_sqlite;

impl CollectionRepositoryTrait for SqliteTx {
    fn replace_collection_bonds(
        &mut self,
        collection_id: &str,
        rows: &[CollectionBond],
    ) -> Result<usize> {
        diesel::delete(
            collection_bonds::table.filter(collection_bonds::collection_id.eq(collection_id)),
        )
        .execute(self.conn())
        .into_core()?;

        let rows: Vec<CollectionBondDB> = rows.iter().map(CollectionBondDB::from).collect();
        let mut written = 0;
        for chunk in chunk_for_sqlite(&rows) {
            written += diesel::insert_into(collection_bonds::table)
                .values(chunk)
                .execute(self.conn())
                .into_core()?;
        }
        Ok(written)
    }

    fn list_collection_bond_ids(
        &mut self,
        collection_id: &str,
        duration: Duration,
        limit: i64,
    ) -> Result<Vec<i64>> {
        collection_bonds::table
            .filter(collection_bonds::collection_id.eq(collection_id))
            .filter(collection_bonds::duration.eq(duration.as_str()))
            .order(collection_bonds::ordinal.asc())
            .limit(limit)
            .select(collection_bonds::bond_id)
            .load(self.conn())
            .into_core()
    }

    fn list_collection_members(&mut self, collection_id: &str) -> Result<Vec<i64>> {
        collection_bonds::table
            .filter(collection_bonds::collection_id.eq(collection_id))
            .select(collection_bonds::bond_id)
            .distinct()
            .order(collection_bonds::bond_id.asc())
            .load(self.conn())
            .into_core()
    }
}

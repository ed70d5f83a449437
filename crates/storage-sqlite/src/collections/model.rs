//! Database model for collection membership.

use bond_recommender_core::collections::CollectionBond;
use diesel::prelude::*;

#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::collection_bonds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollectionBondDB {
    pub collection_id: String,
    pub duration: String,
    pub bond_id: i64,
    pub ordinal: i32,
}

impl From<&CollectionBond> for CollectionBondDB {
    fn from(row: &CollectionBond) -> Self {
        Self {
            collection_id: row.collection_id.clone(),
            duration: row.duration.as_str().to_string(),
            bond_id: row.bond_id,
            ordinal: row.index,
        }
    }
}

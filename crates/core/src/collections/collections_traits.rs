use crate::errors::Result;

use super::collections_model::{CollectionBond, Duration};

/// Collection membership storage
pub trait CollectionRepositoryTrait {
    /// Replaces the membership of one collection. Returns the number of rows written.
    fn replace_collection_bonds(&mut self, collection_id: &str, rows: &[CollectionBond]) -> Result<usize>;
    /// Bond ids of a collection for a duration, best rank first.
    fn list_collection_bond_ids(
        &mut self,
        collection_id: &str,
        duration: Duration,
        limit: i64,
    ) -> Result<Vec<i64>>;
    /// Distinct bond ids of a collection across all durations.
    fn list_collection_members(&mut self, collection_id: &str) -> Result<Vec<i64>>;
}

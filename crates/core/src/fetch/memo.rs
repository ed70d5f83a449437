use std::collections::HashMap;

use crate::errors::Result;

/// Bond ids resolved during one fetch pass, keyed by ISIN or security id.
///
/// A `None` entry records a key known to have no bond, so repeated misses
/// do not hit the store again.
#[derive(Debug, Default)]
pub struct BondIdMemo {
    ids: HashMap<String, Option<i64>>,
}

impl BondIdMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached id for `key`, or runs `lookup` and caches its outcome.
    ///
    /// A not-found lookup is cached as absent and returns `Ok(None)`; other
    /// errors are returned and nothing is cached.
    pub fn resolve<F>(&mut self, key: &str, lookup: F) -> Result<Option<i64>>
    where
        F: FnOnce(&str) -> Result<i64>,
    {
        if let Some(cached) = self.ids.get(key) {
            return Ok(*cached);
        }

        let resolved = match lookup(key) {
            Ok(id) => Some(id),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };
        self.ids.insert(key.to_string(), resolved);
        Ok(resolved)
    }

    /// Records a bond created during the pass.
    pub fn insert(&mut self, key: &str, bond_id: i64) {
        self.ids.insert(key.to_string(), Some(bond_id));
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

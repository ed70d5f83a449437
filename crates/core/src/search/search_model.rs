use serde::{Deserialize, Serialize};

use crate::bonds::Bond;

/// A page of search hits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub bonds: Vec<Bond>,
    /// Number of matches before paging
    pub total: i64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self {
            bonds: Vec::new(),
            total: 0,
        }
    }
}

use std::sync::Arc;

use log::debug;

use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::errors::Result;
use crate::store::Store;

use super::search_model::SearchResult;

/// Bond search by free text
pub struct SearchService {
    store: Arc<dyn Store>,
}

impl SearchService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Runs a search. A query with no letters or digits yields an empty result.
    pub fn search(&self, text: &str, limit: Option<i64>, skip: Option<i64>) -> Result<SearchResult> {
        let words = normalize_query(text);
        if words.is_empty() {
            return Ok(SearchResult::empty());
        }

        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_SEARCH_LIMIT);
        let skip = skip.unwrap_or(0).max(0);

        debug!("search {:?} (skip {}, limit {})", words, skip, limit);
        let mut tx = self.store.read()?;
        let (bonds, total) = tx.search_bonds(&words, skip, limit)?;
        Ok(SearchResult { bonds, total })
    }
}

/// Splits a query into lowercase words of Latin, Cyrillic and digit characters.
pub fn normalize_query(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| is_searchable(*c))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_searchable(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

use crate::bonds::Bond;
use crate::errors::Result;

/// Full-text bond lookup
pub trait SearchRepositoryTrait {
    /// Bonds whose ISIN, security id, names or issuer name contain every word,
    /// ordered by short name, plus the total match count.
    ///
    /// Words are lowercase and non-empty.
    fn search_bonds(&mut self, words: &[String], skip: i64, limit: i64) -> Result<(Vec<Bond>, i64)>;
}

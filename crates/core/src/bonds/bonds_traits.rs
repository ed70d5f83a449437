use crate::bonds::bonds_model::{Bond, NewBond};
use crate::errors::Result;

/// Bond operations inside a store transaction
pub trait BondRepositoryTrait {
    fn get_bond(&mut self, id: i64) -> Result<Bond>;
    fn get_bond_by_moex_id(&mut self, moex_id: i64) -> Result<Bond>;
    fn get_bond_by_isin(&mut self, isin: &str) -> Result<Bond>;
    fn get_bond_by_security_id(&mut self, security_id: &str) -> Result<Bond>;
    fn list_bonds(&mut self) -> Result<Vec<Bond>>;
    fn count_bonds(&mut self) -> Result<i64>;
    /// Fails with `DatabaseError::UniqueViolation` when the exchange id, ISIN or
    /// security id is already taken.
    fn create_bond(&mut self, new_bond: NewBond) -> Result<Bond>;
}

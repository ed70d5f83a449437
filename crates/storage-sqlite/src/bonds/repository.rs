use bond_recommender_core::bonds::{Bond, BondRepositoryTrait, NewBond};
use bond_recommender_core::search::SearchRepositoryTrait;
use bond_recommender_core::Result;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use super::model::{BondDB, NewBondDB};
use crate::errors::IntoCore;
use crate::schema::{bonds, issuers};
use crate::store::SqliteTx;

fn to_bonds(rows: Vec<BondDB>) -> Result<Vec<Bond>> {
    rows.into_iter().map(Bond::try_from).collect()
}

/// Bonds whose search key contains every word.
fn matching<'a>(words: &'a [String]) -> bonds::BoxedQuery<'a, Sqlite> {
    words
        .iter()
        .fold(bonds::table.into_boxed(), |query, word| {
            query.filter(bonds::search_key.like(format!("%{}%", word)))
        })
}

impl BondRepositoryTrait for SqliteTx {
    fn get_bond(&mut self, id: i64) -> Result<Bond> {
        let row = bonds::table
            .find(id)
            .select(BondDB::as_select())
            .first(self.conn())
            .into_core()?;
        Bond::try_from(row)
    }

    fn get_bond_by_moex_id(&mut self, moex_id: i64) -> Result<Bond> {
        let row = bonds::table
            .filter(bonds::moex_id.eq(moex_id))
            .select(BondDB::as_select())
            .first(self.conn())
            .into_core()?;
        Bond::try_from(row)
    }

    fn get_bond_by_isin(&mut self, isin: &str) -> Result<Bond> {
        let row = bonds::table
            .filter(bonds::isin.eq(isin))
            .select(BondDB::as_select())
            .first(self.conn())
            .into_core()?;
        Bond::try_from(row)
    }

    fn get_bond_by_security_id(&mut self, security_id: &str) -> Result<Bond> {
        let row = bonds::table
            .filter(bonds::security_id.eq(security_id))
            .select(BondDB::as_select())
            .first(self.conn())
            .into_core()?;
        Bond::try_from(row)
    }

    fn list_bonds(&mut self) -> Result<Vec<Bond>> {
        let rows = bonds::table
            .order(bonds::id.asc())
            .select(BondDB::as_select())
            .load(self.conn())
            .into_core()?;
        to_bonds(rows)
    }

    fn count_bonds(&mut self) -> Result<i64> {
        bonds::table.count().get_result(self.conn()).into_core()
    }

    fn create_bond(&mut self, new_bond: NewBond) -> Result<Bond> {
        let issuer_name: String = issuers::table
            .find(new_bond.issuer_id)
            .select(issuers::name)
            .first(self.conn())
            .into_core()?;
        let row = NewBondDB::new(new_bond, &issuer_name);

        let created = diesel::insert_into(bonds::table)
            .values(&row)
            .returning(BondDB::as_returning())
            .get_result(self.conn())
            .into_core()?;
        Bond::try_from(created)
    }
}

impl SearchRepositoryTrait for SqliteTx {
    fn search_bonds(&mut self, words: &[String], skip: i64, limit: i64) -> Result<(Vec<Bond>, i64)> {
        let total: i64 = matching(words)
            .count()
            .get_result(self.conn())
            .into_core()?;
        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let rows = matching(words)
            .order((bonds::short_name.asc(), bonds::id.asc()))
            .offset(skip)
            .limit(limit)
            .select(BondDB::as_select())
            .load(self.conn())
            .into_core()?;
        Ok((to_bonds(rows)?, total))
    }
}

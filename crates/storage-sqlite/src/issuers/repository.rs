use bond_recommender_core::issuers::{Issuer, IssuerRepositoryTrait, NewIssuer};
use bond_recommender_core::Result;
use diesel::prelude::*;

use super::model::{IssuerDB, NewIssuerDB};
use crate::errors::IntoCore;
use crate::schema::issuers;
use crate::store::SqliteTx;

impl IssuerRepositoryTrait for SqliteTx {
    fn get_issuer_by_moex_id(&mut self, moex_id: i64) -> Result<Issuer> {
        issuers::table
            .filter(issuers::moex_id.eq(moex_id))
            .select(IssuerDB::as_select())
            .first(self.conn())
            .map(Issuer::from)
            .into_core()
    }

    fn get_issuer(&mut self, id: i64) -> Result<Issuer> {
        issuers::table
            .find(id)
            .select(IssuerDB::as_select())
            .first(self.conn())
            .map(Issuer::from)
            .into_core()
    }

    fn list_issuers(&mut self) -> Result<Vec<Issuer>> {
        let rows = issuers::table
            .order(issuers::id.asc())
            .select(IssuerDB::as_select())
            .load(self.conn())
            .into_core()?;
        Ok(rows.into_iter().map(Issuer::from).collect())
    }

    fn create_issuer(&mut self, new_issuer: NewIssuer) -> Result<Issuer> {
        let row: NewIssuerDB = new_issuer.into();
        diesel::insert_into(issuers::table)
            .values(&row)
            .returning(IssuerDB::as_returning())
            .get_result(self.conn())
            .map(Issuer::from)
            .into_core()
    }
}

//! Database models for issuers.

use bond_recommender_core::issuers::{Issuer, NewIssuer};
use diesel::prelude::*;

/// Database model for issuers
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::issuers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct IssuerDB {
    pub id: i64,
    pub moex_id: i64,
    pub name: String,
    pub inn: Option<String>,
    pub okpo: Option<String>,
}

/// Database model for creating a new issuer
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::issuers)]
pub struct NewIssuerDB {
    pub moex_id: i64,
    pub name: String,
    pub inn: Option<String>,
    pub okpo: Option<String>,
}

impl From<IssuerDB> for Issuer {
    fn from(db: IssuerDB) -> Self {
        Self {
            id: db.id,
            moex_id: db.moex_id,
            name: db.name,
            inn: db.inn,
            okpo: db.okpo,
        }
    }
}

impl From<NewIssuer> for NewIssuerDB {
    fn from(domain: NewIssuer) -> Self {
        Self {
            moex_id: domain.moex_id,
            name: domain.name,
            inn: domain.inn,
            okpo: domain.okpo,
        }
    }
}

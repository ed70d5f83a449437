//! Database models for bonds.

use bond_recommender_core::bonds::{Bond, NewBond};
use bond_recommender_core::Result;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::utils::{parse_code, parse_decimal};

/// Database model for bonds
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::bonds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BondDB {
    pub id: i64,
    pub issuer_id: i64,
    pub moex_id: i64,
    pub security_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    pub is_traded: bool,
    pub qualified_only: bool,
    pub high_risk: bool,
    pub bond_type: String,
    pub primary_board_id: String,
    pub market_price_board_id: String,
    pub initial_face_value: String,
    pub face_unit: String,
    pub issue_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub listing_level: i32,
    pub coupon_frequency: i32,
    pub search_key: String,
}

/// Database model for creating a new bond
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::bonds)]
pub struct NewBondDB {
    pub issuer_id: i64,
    pub moex_id: i64,
    pub security_id: String,
    pub isin: String,
    pub short_name: String,
    pub full_name: String,
    pub is_traded: bool,
    pub qualified_only: bool,
    pub high_risk: bool,
    pub bond_type: String,
    pub primary_board_id: String,
    pub market_price_board_id: String,
    pub initial_face_value: String,
    pub face_unit: String,
    pub issue_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub listing_level: i32,
    pub coupon_frequency: i32,
    pub search_key: String,
}

/// Lowercase haystack the search matches words against.
pub fn search_key(bond: &NewBond, issuer_name: &str) -> String {
    [
        bond.isin.as_str(),
        bond.security_id.as_str(),
        bond.short_name.as_str(),
        bond.full_name.as_str(),
        issuer_name,
    ]
    .join(" ")
    .to_lowercase()
}

impl NewBondDB {
    pub fn new(domain: NewBond, issuer_name: &str) -> Self {
        let search_key = search_key(&domain, issuer_name);
        Self {
            issuer_id: domain.issuer_id,
            moex_id: domain.moex_id,
            security_id: domain.security_id,
            isin: domain.isin,
            short_name: domain.short_name,
            full_name: domain.full_name,
            is_traded: domain.is_traded,
            qualified_only: domain.qualified_only,
            high_risk: domain.high_risk,
            bond_type: domain.bond_type.as_str().to_string(),
            primary_board_id: domain.primary_board_id,
            market_price_board_id: domain.market_price_board_id,
            initial_face_value: domain.initial_face_value.to_string(),
            face_unit: domain.face_unit,
            issue_date: domain.issue_date,
            maturity_date: domain.maturity_date,
            listing_level: domain.listing_level,
            coupon_frequency: domain.coupon_frequency,
            search_key,
        }
    }
}

impl TryFrom<BondDB> for Bond {
    type Error = bond_recommender_core::Error;

    fn try_from(db: BondDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            issuer_id: db.issuer_id,
            moex_id: db.moex_id,
            security_id: db.security_id,
            isin: db.isin,
            short_name: db.short_name,
            full_name: db.full_name,
            is_traded: db.is_traded,
            qualified_only: db.qualified_only,
            high_risk: db.high_risk,
            bond_type: parse_code("bond_type", &db.bond_type)?,
            primary_board_id: db.primary_board_id,
            market_price_board_id: db.market_price_board_id,
            initial_face_value: parse_decimal("initial_face_value", &db.initial_face_value)?,
            face_unit: db.face_unit,
            issue_date: db.issue_date,
            maturity_date: db.maturity_date,
            listing_level: db.listing_level,
            coupon_frequency: db.coupon_frequency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bond_recommender_core::bonds::BondType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_search_key_is_lowercase() {
        let bond = NewBond {
            issuer_id: 1,
            moex_id: 1,
            security_id: "SU26238RMFS4".into(),
            isin: "RU000A1038V6".into(),
            short_name: "ОФЗ 26238".into(),
            full_name: "ОФЗ-ПД 26238".into(),
            is_traded: true,
            qualified_only: false,
            high_risk: false,
            bond_type: BondType::OfzBond,
            primary_board_id: "TQOB".into(),
            market_price_board_id: "TQOB".into(),
            initial_face_value: dec!(1000),
            face_unit: "RUB".into(),
            issue_date: None,
            maturity_date: None,
            listing_level: 1,
            coupon_frequency: 2,
        };
        let key = search_key(&bond, "Минфин России");
        assert!(key.contains("su26238rmfs4"));
        assert!(key.contains("офз-пд"));
        assert!(key.contains("минфин"));
    }
}

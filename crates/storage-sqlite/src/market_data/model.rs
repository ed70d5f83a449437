//! Database model for market snapshots.

use bond_recommender_core::market_data::MarketSnapshot;
use bond_recommender_core::Result;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_optional_decimal;

/// Database model for the live market snapshot of a bond. Doubles as the upsert changeset.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::market_data)]
#[diesel(primary_key(bond_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketDataDB {
    pub bond_id: i64,
    pub time: NaiveDateTime,
    pub face_value: Option<String>,
    pub currency: Option<String>,
    pub last: Option<String>,
    pub last_change: Option<String>,
    pub close_price: Option<String>,
    pub legal_close_price: Option<String>,
    pub accrued_interest: Option<String>,
}

impl From<MarketSnapshot> for MarketDataDB {
    fn from(domain: MarketSnapshot) -> Self {
        Self {
            bond_id: domain.bond_id,
            time: domain.time,
            face_value: domain.face_value.map(|v| v.to_string()),
            currency: domain.currency,
            last: domain.last.map(|v| v.to_string()),
            last_change: domain.last_change.map(|v| v.to_string()),
            close_price: domain.close_price.map(|v| v.to_string()),
            legal_close_price: domain.legal_close_price.map(|v| v.to_string()),
            accrued_interest: domain.accrued_interest.map(|v| v.to_string()),
        }
    }
}

impl TryFrom<MarketDataDB> for MarketSnapshot {
    type Error = bond_recommender_core::Error;

    fn try_from(db: MarketDataDB) -> Result<Self> {
        Ok(Self {
            bond_id: db.bond_id,
            time: db.time,
            face_value: parse_optional_decimal("face_value", db.face_value.as_deref())?,
            currency: db.currency,
            last: parse_optional_decimal("last", db.last.as_deref())?,
            last_change: parse_optional_decimal("last_change", db.last_change.as_deref())?,
            close_price: parse_optional_decimal("close_price", db.close_price.as_deref())?,
            legal_close_price: parse_optional_decimal(
                "legal_close_price",
                db.legal_close_price.as_deref(),
            )?,
            accrued_interest: parse_optional_decimal(
                "accrued_interest",
                db.accrued_interest.as_deref(),
            )?,
        })
    }
}

//! Database models for offers.

use bond_recommender_core::offers::{NewOffer, Offer, OfferType};
use bond_recommender_core::Result;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::utils::parse_optional_decimal;

/// Database model for offers
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::offers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OfferDB {
    pub id: i64,
    pub bond_id: i64,
    pub issue_value: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub face_value: Option<String>,
    pub face_unit: Option<String>,
    pub price: Option<String>,
    pub value: Option<String>,
    pub agent: Option<String>,
    pub offer_type: Option<String>,
}

/// Database model for creating a new offer
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::offers)]
pub struct NewOfferDB {
    pub bond_id: i64,
    pub issue_value: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub face_value: Option<String>,
    pub face_unit: Option<String>,
    pub price: Option<String>,
    pub value: Option<String>,
    pub agent: Option<String>,
    pub offer_type: Option<String>,
}

impl From<NewOffer> for NewOfferDB {
    fn from(domain: NewOffer) -> Self {
        Self {
            bond_id: domain.bond_id,
            issue_value: domain.issue_value.map(|v| v.to_string()),
            date: domain.date,
            start_date: domain.start_date,
            end_date: domain.end_date,
            face_value: domain.face_value.map(|v| v.to_string()),
            face_unit: domain.face_unit,
            price: domain.price.map(|v| v.to_string()),
            value: domain.value.map(|v| v.to_string()),
            agent: domain.agent,
            offer_type: domain.offer_type.map(String::from),
        }
    }
}

impl TryFrom<OfferDB> for Offer {
    type Error = bond_recommender_core::Error;

    fn try_from(db: OfferDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            bond_id: db.bond_id,
            issue_value: parse_optional_decimal("issue_value", db.issue_value.as_deref())?,
            date: db.date,
            start_date: db.start_date,
            end_date: db.end_date,
            face_value: parse_optional_decimal("face_value", db.face_value.as_deref())?,
            face_unit: db.face_unit,
            price: parse_optional_decimal("price", db.price.as_deref())?,
            value: parse_optional_decimal("value", db.value.as_deref())?,
            agent: db.agent,
            offer_type: db.offer_type.map(OfferType::from),
        })
    }
}

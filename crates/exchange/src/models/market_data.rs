use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::dates::nullable_date_time;

/// Current trading data of a security on a board.
///
/// Merged from the `securities` and `marketdata` sections of the bond market
/// snapshot, keyed by `(security_id, board_id)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketData {
    pub security_id: String,
    pub board_id: String,
    pub accrued_interest: Option<Decimal>,
    pub face_value: Option<Decimal>,
    pub currency: Option<String>,
    pub last: Option<Decimal>,
    pub last_change: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub legal_close_price: Option<Decimal>,
    pub time: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSecurityData {
    #[serde(rename = "SECID")]
    pub security_id: String,
    #[serde(rename = "BOARDID")]
    pub board_id: String,
    #[serde(rename = "ACCRUEDINT", default)]
    pub accrued_interest: Option<Decimal>,
    #[serde(rename = "FACEVALUE", default)]
    pub face_value: Option<Decimal>,
    #[serde(rename = "CURRENCYID", default)]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMarketData {
    #[serde(rename = "SECID")]
    pub security_id: String,
    #[serde(rename = "BOARDID")]
    pub board_id: String,
    #[serde(rename = "LAST", default)]
    pub last: Option<Decimal>,
    #[serde(rename = "LASTCHANGE", default)]
    pub last_change: Option<Decimal>,
    #[serde(rename = "CLOSEPRICE", default)]
    pub close_price: Option<Decimal>,
    #[serde(rename = "LCLOSEPRICE", default)]
    pub legal_close_price: Option<Decimal>,
    #[serde(rename = "SYSTIME", default, deserialize_with = "nullable_date_time")]
    pub time: Option<NaiveDateTime>,
}

/// Joins both sections by `(SECID, BOARDID)`. Output is ordered by key.
pub(crate) fn merge_market_data(
    securities: Vec<RawSecurityData>,
    market_data: Vec<RawMarketData>,
) -> Vec<MarketData> {
    let mut merged: BTreeMap<(String, String), MarketData> = BTreeMap::new();

    for s in securities {
        let item = merged
            .entry((s.security_id.clone(), s.board_id.clone()))
            .or_insert_with(|| MarketData {
                security_id: s.security_id,
                board_id: s.board_id,
                ..Default::default()
            });
        item.accrued_interest = s.accrued_interest;
        item.face_value = s.face_value;
        item.currency = s.currency;
    }

    for m in market_data {
        let item = merged
            .entry((m.security_id.clone(), m.board_id.clone()))
            .or_insert_with(|| MarketData {
                security_id: m.security_id,
                board_id: m.board_id,
                ..Default::default()
            });
        item.last = m.last;
        item.last_change = m.last_change;
        item.close_price = m.close_price;
        item.legal_close_price = m.legal_close_price;
        item.time = m.time;
    }

    merged.into_values().collect()
}

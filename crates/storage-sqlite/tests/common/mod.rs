#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bond_recommender_exchange::{
    Amortization, BondizationQuery, Coupon, ExchangeProvider, MarketData, Offer, Result,
    Security, SecurityDescription, SecurityListQuery,
};
use bond_recommender_storage_sqlite::SqliteStore;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::TempDir;
use tokio::sync::Notify;

/// A migrated database in a temporary directory, removed on drop.
pub struct TestDb {
    pub store: Arc<SqliteStore>,
    _dir: TempDir,
}

pub fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("db").join("bonds.db");
    let store = SqliteStore::open(path.to_str().expect("utf-8 path"))
        .expect("Failed to open database");
    TestDb {
        store: Arc::new(store),
        _dir: dir,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(18, 45, 0).unwrap()
}

// =============================================================================
// Exchange fixtures
// =============================================================================

pub fn security(id: i64, isin: &str, issuer_id: i64) -> Security {
    serde_json::from_value(json!({
        "id": id,
        "secid": isin,
        "shortname": format!("Облигация {}", id),
        "name": format!("Облигации биржевые {}", id),
        "isin": isin,
        "is_traded": 1,
        "emitent_id": issuer_id,
        "emitent_title": format!("ПАО Эмитент {}", issuer_id),
        "emitent_inn": "7707083893",
        "type": "corporate_bond",
        "primary_boardid": "TQCB",
        "marketprice_boardid": "TQCB"
    }))
    .unwrap()
}

pub fn description(face_unit: &str, maturity: NaiveDate) -> SecurityDescription {
    let properties = serde_json::from_value(json!([
        {"name": "INITIALFACEVALUE", "value": "1000", "type": "number"},
        {"name": "FACEUNIT", "value": face_unit, "type": "string"},
        {"name": "LISTLEVEL", "value": "2", "type": "number"},
        {"name": "ISSUEDATE", "value": "2022-01-15", "type": "date"},
        {"name": "MATDATE", "value": maturity.format("%Y-%m-%d").to_string(), "type": "date"},
        {"name": "COUPONFREQUENCY", "value": "4", "type": "number"}
    ]))
    .unwrap();
    SecurityDescription::new(properties)
}

pub fn coupon(isin: &str, on: NaiveDate, value: i64) -> Coupon {
    serde_json::from_value(json!({
        "isin": isin,
        "name": "coupon",
        "coupondate": on.format("%Y-%m-%d").to_string(),
        "recorddate": null,
        "startdate": null,
        "facevalue": 1000,
        "faceunit": "RUB",
        "value": value,
        "valueprc": 8,
        "value_rub": value
    }))
    .unwrap()
}

pub fn maturity(isin: &str, on: NaiveDate) -> Amortization {
    serde_json::from_value(json!({
        "isin": isin,
        "name": "maturity",
        "amortdate": on.format("%Y-%m-%d").to_string(),
        "facevalue": 1000,
        "faceunit": "RUB",
        "value": 1000,
        "valueprc": 100,
        "value_rub": 1000,
        "data_source": "maturity"
    }))
    .unwrap()
}

pub fn offer(isin: &str, start: NaiveDate, end: NaiveDate) -> Offer {
    offer_of_type(isin, start, end, json!("Оферта"))
}

pub fn offer_of_type(
    isin: &str,
    start: NaiveDate,
    end: NaiveDate,
    offer_type: serde_json::Value,
) -> Offer {
    serde_json::from_value(json!({
        "isin": isin,
        "name": "offer",
        "offerdate": null,
        "offerdatestart": start.format("%Y-%m-%d").to_string(),
        "offerdateend": end.format("%Y-%m-%d").to_string(),
        "facevalue": 1000,
        "faceunit": "RUB",
        "price": 100,
        "value": 1000,
        "agent": null,
        "offertype": offer_type
    }))
    .unwrap()
}

pub fn market_data(security_id: &str, price: Decimal, currency: &str) -> MarketData {
    MarketData {
        security_id: security_id.to_string(),
        board_id: "TQCB".to_string(),
        accrued_interest: Some(Decimal::from(5)),
        face_value: Some(Decimal::from(1000)),
        currency: Some(currency.to_string()),
        last: Some(price),
        time: Some(datetime(2024, 3, 1)),
        ..Default::default()
    }
}

// =============================================================================
// Fake exchange
// =============================================================================

/// In-memory exchange serving fixed listings in pages of the requested size.
#[derive(Default)]
pub struct FakeExchange {
    pub securities: Vec<Security>,
    pub descriptions: HashMap<String, SecurityDescription>,
    pub coupons: Vec<Coupon>,
    pub amortizations: Vec<Amortization>,
    pub offers: Vec<Offer>,
    pub market_data: Vec<MarketData>,
    /// `from` bound of every coupon page request
    pub coupon_since: Mutex<Vec<Option<NaiveDate>>>,
    /// `from` bound of every amortization page request
    pub amortization_since: Mutex<Vec<Option<NaiveDate>>>,
    pub description_requests: Mutex<usize>,
}

fn page<T: Clone>(items: &[T], start: u32, limit: u32) -> Vec<T> {
    items
        .iter()
        .skip(start as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

fn on_or_after<T: Clone>(items: &[T], from: Option<NaiveDate>, day: impl Fn(&T) -> Option<NaiveDate>) -> Vec<T> {
    items
        .iter()
        .filter(|item| match (from, day(item)) {
            (Some(from), Some(d)) => d >= from,
            _ => true,
        })
        .cloned()
        .collect()
}

#[async_trait]
impl ExchangeProvider for FakeExchange {
    async fn list_securities(&self, query: &SecurityListQuery) -> Result<Vec<Security>> {
        Ok(page(&self.securities, query.start, query.limit))
    }

    async fn list_coupons(&self, query: &BondizationQuery) -> Result<Vec<Coupon>> {
        self.coupon_since.lock().unwrap().push(query.from);
        let rows = on_or_after(&self.coupons, query.from, Coupon::payment_date);
        Ok(page(&rows, query.start, query.limit))
    }

    async fn list_amortizations(&self, query: &BondizationQuery) -> Result<Vec<Amortization>> {
        self.amortization_since.lock().unwrap().push(query.from);
        let rows = on_or_after(&self.amortizations, query.from, |a| a.date);
        Ok(page(&rows, query.start, query.limit))
    }

    async fn list_offers(&self, query: &BondizationQuery) -> Result<Vec<Offer>> {
        Ok(page(&self.offers, query.start, query.limit))
    }

    async fn get_market_data(&self) -> Result<Vec<MarketData>> {
        Ok(self.market_data.clone())
    }

    async fn get_security_description(&self, security_id: &str) -> Result<SecurityDescription> {
        *self.description_requests.lock().unwrap() += 1;
        Ok(self
            .descriptions
            .get(security_id)
            .cloned()
            .unwrap_or_else(|| SecurityDescription::new(Vec::new())))
    }
}

/// Wraps a [`FakeExchange`] and holds the first securities request until
/// [`release`](Self::release) is called.
pub struct GatedExchange {
    inner: FakeExchange,
    /// Notified when the first securities request arrives
    pub started: Notify,
    release: Notify,
    released: AtomicBool,
}

impl GatedExchange {
    pub fn new(inner: FakeExchange) -> Self {
        Self {
            inner,
            started: Notify::new(),
            release: Notify::new(),
            released: AtomicBool::new(false),
        }
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl ExchangeProvider for GatedExchange {
    async fn list_securities(&self, query: &SecurityListQuery) -> Result<Vec<Security>> {
        if !self.released.swap(true, Ordering::SeqCst) {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.inner.list_securities(query).await
    }

    async fn list_coupons(&self, query: &BondizationQuery) -> Result<Vec<Coupon>> {
        self.inner.list_coupons(query).await
    }

    async fn list_amortizations(&self, query: &BondizationQuery) -> Result<Vec<Amortization>> {
        self.inner.list_amortizations(query).await
    }

    async fn list_offers(&self, query: &BondizationQuery) -> Result<Vec<Offer>> {
        self.inner.list_offers(query).await
    }

    async fn get_market_data(&self) -> Result<Vec<MarketData>> {
        self.inner.get_market_data().await
    }

    async fn get_security_description(&self, security_id: &str) -> Result<SecurityDescription> {
        self.inner.get_security_description(security_id).await
    }
}

/// Two RUB corporate bonds of one issuer plus a USD bond, with payments,
/// an offer and prices. `today` is 2024-03-01.
pub fn sample_exchange() -> FakeExchange {
    let mut exchange = FakeExchange::default();
    let bonds = [
        (101, "RU000A1001A1", date(2025, 9, 1), "RUB"),
        (102, "RU000A1002B2", date(2025, 3, 1), "SUR"),
        (103, "XS0000000003", date(2026, 3, 1), "USD"),
    ];

    for (id, isin, matures, unit) in bonds {
        exchange.securities.push(security(id, isin, 7));
        exchange
            .descriptions
            .insert(isin.to_string(), description(unit, matures));
        for quarter in 0..6u32 {
            let on = chrono::Months::new(3 * (quarter + 1));
            exchange
                .coupons
                .push(coupon(isin, date(2024, 3, 1).checked_add_months(on).unwrap(), 40));
        }
        exchange.amortizations.push(maturity(isin, matures));
    }
    exchange
        .offers
        .push(offer("RU000A1001A1", date(2024, 9, 2), date(2024, 9, 6)));
    exchange.market_data = vec![
        market_data("RU000A1001A1", Decimal::from(95), "SUR"),
        market_data("RU000A1002B2", Decimal::from(98), "RUB"),
        market_data("XS0000000003", Decimal::from(90), "USD"),
        market_data("UNKNOWN", Decimal::from(100), "RUB"),
    ];
    exchange
}

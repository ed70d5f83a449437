//! ISS (Moscow Exchange Informational & Statistical Server) client.
//!
//! # API Endpoints
//!
//! - Securities: `/iss/securities.json?engine=stock&market=bonds&is_trading=1`
//! - Description: `/iss/securities/{secid}.json?iss.only=description`
//! - Bondization: `/iss/statistics/engines/stock/markets/bonds/bondization.json?iss.only=coupons`
//!   (also `amortizations` and `offers`)
//! - Market data: `/iss/engines/stock/markets/bonds/securities.json?iss.only=securities,marketdata`
//!
//! # Response Format
//!
//! All requests ask for `iss.json=extended&iss.meta=off`. The response is an
//! array of objects, each mapping a section name to an array of rows:
//!
//! ```text
//! [
//!   {"charsetinfo": {"name": "utf-8"}},
//!   {"securities": [{...}, {...}]}
//! ]
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ExchangeError, Result};
use crate::models::{
    merge_market_data, Amortization, Coupon, MarketData, Offer, Property, RawMarketData,
    RawSecurityData, Security, SecurityDescription,
};
use crate::provider::{BondizationQuery, ExchangeProvider, SecurityListQuery};

/// Public ISS endpoint.
pub const DEFAULT_URL: &str = "https://iss.moex.com";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SECURITIES_PATH: &str = "/iss/securities.json";
const BONDIZATION_PATH: &str = "/iss/statistics/engines/stock/markets/bonds/bondization.json";
const MARKET_DATA_PATH: &str = "/iss/engines/stock/markets/bonds/securities.json";

/// HTTP client for the ISS JSON API.
pub struct IssClient {
    client: Client,
    base_url: String,
}

impl Default for IssClient {
    fn default() -> Self {
        Self::build(DEFAULT_URL.to_string())
    }
}

impl IssClient {
    /// Creates a client for a custom ISS root URL.
    ///
    /// Only absolute `http`/`https` URLs are accepted; a trailing `/` is ignored.
    pub fn with_url(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ExchangeError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ExchangeError::InvalidUrl {
                url: base_url.to_string(),
                reason: "only http(s) URLs are supported".to_string(),
            });
        }
        Ok(Self::build(trimmed.to_string()))
    }

    fn build(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET and decodes the extended JSON envelope.
    async fn get(&self, path: &str, params: Vec<(&'static str, String)>) -> Result<Envelope> {
        let mut params = params;
        params.push(("iss.json", "extended".to_string()));
        params.push(("iss.meta", "off".to_string()));

        let url = Url::parse_with_params(&format!("{}{}", self.base_url, path), &params)
            .map_err(|e| ExchangeError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })?;
        let url_text = url.to_string();

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("GET {}: {}", url_text, e);
            ExchangeError::Network(e)
        })?;

        let status = response.status();
        debug!("GET {} -> {}", url_text, status.as_u16());
        if !status.is_success() {
            return Err(ExchangeError::Http {
                url: url_text,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let blocks: Vec<Value> = serde_json::from_str(&body).map_err(|e| {
            warn!("GET {}: {}", url_text, e);
            ExchangeError::decode(&url_text, e)
        })?;

        Ok(Envelope {
            url: url_text,
            blocks,
        })
    }

    async fn bondization<T: DeserializeOwned>(
        &self,
        section: &'static str,
        query: &BondizationQuery,
    ) -> Result<Vec<T>> {
        let mut params = vec![
            ("iss.only", section.to_string()),
            ("sort_order", "asc".to_string()),
        ];
        params.extend(query.to_params());
        self.get(BONDIZATION_PATH, params).await?.section(section)
    }
}

/// Decoded extended-JSON response.
struct Envelope {
    url: String,
    blocks: Vec<Value>,
}

impl Envelope {
    /// Collects the rows of `name` across all blocks. A missing section is an empty list.
    fn section<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for block in &self.blocks {
            if let Some(Value::Array(rows)) = block.get(name) {
                for row in rows {
                    let item = <T as Deserialize>::deserialize(row)
                        .map_err(|e| ExchangeError::decode(&self.url, e))?;
                    items.push(item);
                }
            }
        }
        Ok(items)
    }
}

#[async_trait]
impl ExchangeProvider for IssClient {
    async fn list_securities(&self, query: &SecurityListQuery) -> Result<Vec<Security>> {
        self.get(SECURITIES_PATH, query.to_params())
            .await?
            .section("securities")
    }

    async fn list_coupons(&self, query: &BondizationQuery) -> Result<Vec<Coupon>> {
        self.bondization("coupons", query).await
    }

    async fn list_amortizations(&self, query: &BondizationQuery) -> Result<Vec<Amortization>> {
        self.bondization("amortizations", query).await
    }

    async fn list_offers(&self, query: &BondizationQuery) -> Result<Vec<Offer>> {
        self.bondization("offers", query).await
    }

    async fn get_market_data(&self) -> Result<Vec<MarketData>> {
        let envelope = self
            .get(
                MARKET_DATA_PATH,
                vec![("iss.only", "securities,marketdata".to_string())],
            )
            .await?;
        let securities: Vec<RawSecurityData> = envelope.section("securities")?;
        let market_data: Vec<RawMarketData> = envelope.section("marketdata")?;
        Ok(merge_market_data(securities, market_data))
    }

    async fn get_security_description(&self, security_id: &str) -> Result<SecurityDescription> {
        let path = format!("/iss/securities/{}.json", security_id);
        let properties: Vec<Property> = self
            .get(&path, vec![("iss.only", "description".to_string())])
            .await?
            .section("description")?;
        Ok(SecurityDescription::new(properties))
    }
}

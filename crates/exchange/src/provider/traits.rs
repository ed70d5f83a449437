use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{Amortization, Coupon, MarketData, Offer, Security, SecurityDescription};

use super::query::{BondizationQuery, SecurityListQuery};

/// Source of exchange data consumed by the fetch workers.
///
/// Listing methods fetch exactly one page described by the query's
/// `start`/`limit`; use [`Cursor`](super::Cursor) to walk all pages.
/// A page with no items means there is nothing more to read.
#[async_trait]
pub trait ExchangeProvider: Send + Sync {
    /// One page of securities.
    async fn list_securities(&self, query: &SecurityListQuery) -> Result<Vec<Security>>;

    /// One page of coupon payments.
    async fn list_coupons(&self, query: &BondizationQuery) -> Result<Vec<Coupon>>;

    /// One page of amortization and maturity payments.
    async fn list_amortizations(&self, query: &BondizationQuery) -> Result<Vec<Amortization>>;

    /// One page of offers.
    async fn list_offers(&self, query: &BondizationQuery) -> Result<Vec<Offer>>;

    /// Full current market snapshot of the bond market (not paginated).
    async fn get_market_data(&self) -> Result<Vec<MarketData>>;

    /// Description properties of a single security.
    async fn get_security_description(&self, security_id: &str) -> Result<SecurityDescription>;
}

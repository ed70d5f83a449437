use futures::future::BoxFuture;

use crate::errors::Result;
use crate::models::{Amortization, Coupon, Offer, Security};

use super::query::{BondizationQuery, PageQuery, SecurityListQuery};
use super::traits::ExchangeProvider;

type PageFetch<Q, T> =
    for<'b> fn(&'b dyn ExchangeProvider, &'b Q) -> BoxFuture<'b, Result<Vec<T>>>;

/// Walks a paginated listing one page per [`next`](Cursor::next) call.
///
/// The offset moves forward by the number of items actually returned, so a
/// short last page is followed by one more request that comes back empty.
pub struct Cursor<'a, Q, T> {
    provider: &'a dyn ExchangeProvider,
    query: Q,
    fetch: PageFetch<Q, T>,
    exhausted: bool,
}

impl<'a, Q: PageQuery, T> Cursor<'a, Q, T> {
    fn new(provider: &'a dyn ExchangeProvider, query: Q, fetch: PageFetch<Q, T>) -> Self {
        Self {
            provider,
            query,
            fetch,
            exhausted: false,
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once a page comes back empty, and on every call after that.
    pub async fn next(&mut self) -> Result<Option<Vec<T>>> {
        if self.exhausted {
            return Ok(None);
        }

        let items = (self.fetch)(self.provider, &self.query).await?;
        if items.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        self.query.advance(items.len());
        Ok(Some(items))
    }

    pub fn query(&self) -> &Q {
        &self.query
    }
}

impl<'a> Cursor<'a, SecurityListQuery, Security> {
    pub fn securities(provider: &'a dyn ExchangeProvider, query: SecurityListQuery) -> Self {
        Self::new(provider, query, |p, q| p.list_securities(q))
    }
}

impl<'a> Cursor<'a, BondizationQuery, Coupon> {
    pub fn coupons(provider: &'a dyn ExchangeProvider, query: BondizationQuery) -> Self {
        Self::new(provider, query, |p, q| p.list_coupons(q))
    }
}

impl<'a> Cursor<'a, BondizationQuery, Amortization> {
    pub fn amortizations(provider: &'a dyn ExchangeProvider, query: BondizationQuery) -> Self {
        Self::new(provider, query, |p, q| p.list_amortizations(q))
    }
}

impl<'a> Cursor<'a, BondizationQuery, Offer> {
    pub fn offers(provider: &'a dyn ExchangeProvider, query: BondizationQuery) -> Self {
        Self::new(provider, query, |p, q| p.list_offers(q))
    }
}

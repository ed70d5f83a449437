//! Fetch module - pulls exchange data into the store.
//!
//! Workers run inside one store transaction and share a [`BondIdMemo`] for
//! the pass. [`FetchService`] serializes passes and rebuilds derived data
//! before committing.

mod bonds_worker;
mod fetch_model;
mod fetch_service;
mod market_data_worker;
mod memo;
mod offers_worker;
mod payments_worker;

pub use bonds_worker::fetch_bonds;
pub use fetch_model::{
    BondFetchStats, MarketDataFetchStats, OfferFetchStats, PaymentFetchStats, StaticFetchStats,
};
pub use fetch_service::FetchService;
pub use market_data_worker::fetch_market_data;
pub use memo::BondIdMemo;
pub use offers_worker::fetch_offers;
pub use payments_worker::{fetch_payments, watermark};

use tokio_util::sync::CancellationToken;

use crate::constants::{LEGACY_RUB_CODES, RUB};
use crate::errors::{Error, Result};

pub(crate) fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}

/// Maps the legacy ruble codes to `RUB`.
pub(crate) fn normalize_currency(code: &str) -> String {
    if LEGACY_RUB_CODES.contains(&code) {
        RUB.to_string()
    } else {
        code.to_string()
    }
}

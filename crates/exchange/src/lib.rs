//! Moscow Exchange ISS client.
//!
//! This crate wraps the public ISS JSON API used to discover bonds and their
//! payments, offers and current market data.
//!
//! # Overview
//!
//! - [`IssClient`] performs HTTP requests against a configurable base URL and
//!   decodes the "extended" JSON envelope into typed items.
//! - [`ExchangeProvider`] is the seam the fetch workers depend on. Paginated
//!   listings fetch a single page per call.
//! - [`Cursor`] walks a paginated listing page by page and signals the end of
//!   data with `Ok(None)`.
//!
//! ```text
//! +-------------+     +------------------+     +------------+
//! |   Cursor    | --> | ExchangeProvider | --> | IssClient  | --> ISS HTTP API
//! +-------------+     +------------------+     +------------+
//!                                                    |
//!                                                    v
//!                                          extended JSON sections
//!                                          (securities, coupons, ...)
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{ExchangeError, Result};
pub use models::{
    Amortization, AmortizationSource, BondProperties, Coupon, MarketData, Offer, OfferType,
    Property, PropertyType, Security, SecurityDescription, SecurityType,
};
pub use provider::iss::{IssClient, DEFAULT_URL};
pub use provider::{
    BondizationQuery, Cursor, ExchangeProvider, PageQuery, SecurityListQuery, DEFAULT_PAGE_LIMIT,
};

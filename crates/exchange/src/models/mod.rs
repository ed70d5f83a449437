//! Typed ISS response items.

mod bondization;
pub mod dates;
mod description;
mod market_data;
mod security;

pub use bondization::{Amortization, AmortizationSource, Coupon, Offer, OfferType};
pub use description::{
    BondProperties, Property, PropertyType, SecurityDescription, COUPON_FREQUENCY_PROPERTY,
    FACE_UNIT_PROPERTY, HIGH_RISK_PROPERTY, INITIAL_FACE_VALUE_PROPERTY, ISSUE_DATE_PROPERTY,
    LISTING_LEVEL_PROPERTY, MATURITY_DATE_PROPERTY, QUALIFIED_INVESTORS_PROPERTY,
};
pub use market_data::MarketData;
pub(crate) use market_data::{merge_market_data, RawMarketData, RawSecurityData};
pub use security::{Security, SecurityType};

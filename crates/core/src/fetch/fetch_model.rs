//! Fetch statistics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondFetchStats {
    pub new_issuers: usize,
    pub new_bonds: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFetchStats {
    pub new_coupons: usize,
    pub new_amortizations: usize,
    pub new_maturities: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFetchStats {
    pub new_offers: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataFetchStats {
    /// Snapshots written (inserted or overwritten)
    pub updated: usize,
    /// Items without an observation time or for an unknown bond
    pub skipped: usize,
}

/// Outcome of a full static-data pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticFetchStats {
    pub bonds: BondFetchStats,
    pub payments: PaymentFetchStats,
    pub offers: OfferFetchStats,
}

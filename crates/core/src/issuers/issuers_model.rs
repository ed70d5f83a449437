//! Issuer domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a bond issuer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub id: i64,
    pub moex_id: i64,
    pub name: String,
    pub inn: Option<String>,
    pub okpo: Option<String>,
}

/// Input model for registering an issuer seen on the exchange
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewIssuer {
    pub moex_id: i64,
    pub name: String,
    pub inn: Option<String>,
    pub okpo: Option<String>,
}

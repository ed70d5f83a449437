use chrono::NaiveDate;

use crate::models::dates::DATE_FORMAT;

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// A query that can be moved forward by a number of consumed items.
pub trait PageQuery: Send + Sync {
    fn advance(&mut self, count: usize);
}

/// Filter for `/iss/securities.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityListQuery {
    pub engine: String,
    pub market: String,
    pub is_trading: Option<bool>,
    pub limit: u32,
    pub start: u32,
}

impl Default for SecurityListQuery {
    /// Traded securities of the stock-engine bond market.
    fn default() -> Self {
        Self {
            engine: "stock".to_string(),
            market: "bonds".to_string(),
            is_trading: Some(true),
            limit: DEFAULT_PAGE_LIMIT,
            start: 0,
        }
    }
}

impl SecurityListQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("engine", self.engine.clone()),
            ("market", self.market.clone()),
        ];
        if let Some(trading) = self.is_trading {
            params.push(("is_trading", flag(trading)));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("start", self.start.to_string()));
        params
    }
}

impl PageQuery for SecurityListQuery {
    fn advance(&mut self, count: usize) {
        self.start += count as u32;
    }
}

/// Filter for the bondization statistics endpoint (coupons, amortizations, offers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondizationQuery {
    pub from: Option<NaiveDate>,
    pub till: Option<NaiveDate>,
    pub is_traded: Option<bool>,
    pub limit: u32,
    pub start: u32,
}

impl Default for BondizationQuery {
    fn default() -> Self {
        Self {
            from: None,
            till: None,
            is_traded: None,
            limit: DEFAULT_PAGE_LIMIT,
            start: 0,
        }
    }
}

impl BondizationQuery {
    pub fn since(from: Option<NaiveDate>) -> Self {
        Self {
            from,
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(from) = self.from {
            params.push(("from", from.format(DATE_FORMAT).to_string()));
        }
        if let Some(till) = self.till {
            params.push(("till", till.format(DATE_FORMAT).to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("start", self.start.to_string()));
        if let Some(traded) = self.is_traded {
            params.push(("is_traded", flag(traded)));
        }
        params
    }
}

impl PageQuery for BondizationQuery {
    fn advance(&mut self, count: usize) {
        self.start += count as u32;
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

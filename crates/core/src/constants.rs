use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Settlement currency of every report
pub const RUB: &str = "RUB";

/// Legacy currency codes the exchange still reports for roubles
pub const LEGACY_RUB_CODES: [&str; 2] = ["SUR", "RUR"];

/// Broker fee charged on purchase, as a fraction of the open value
pub const OPEN_FEE_RATE: Decimal = dec!(0.0005);

/// Personal income tax rate applied to coupons and discount income
pub const TAX_RATE: Decimal = dec!(0.13);

/// Day count used to annualize returns
pub const DAYS_PER_YEAR: Decimal = dec!(356.25);

/// Decimal precision for stored monetary values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Maximum number of bonds returned for a collection listing
pub const COLLECTION_PAGE_SIZE: usize = 25;

/// Maximum number of candidates the allocator walks per part
pub const SUGGEST_CANDIDATE_LIMIT: usize = 10;

/// Collection candidates must be within this many rate points of the best one
pub const SUGGEST_RATE_SPREAD: Decimal = dec!(1);

/// Largest amount a suggestion accepts, in rubles
pub const MAX_SUGGEST_AMOUNT: Decimal = dec!(1000000000000000);

/// Bonds maturing sooner than this many days are never ranked
pub const MIN_DAYS_TILL_MATURITY: i64 = 3;

/// Default page size for search results
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

//! Exchange provider seam and its ISS implementation.

mod cursor;
pub mod iss;
mod query;
mod traits;

pub use cursor::Cursor;
pub use query::{BondizationQuery, PageQuery, SecurityListQuery, DEFAULT_PAGE_LIMIT};
pub use traits::ExchangeProvider;

//! Store module - the transactional seam implemented by storage crates.

mod store_traits;

pub use store_traits::{Store, StoreTx};

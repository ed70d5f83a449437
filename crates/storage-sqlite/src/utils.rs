//! Utility functions for SQLite storage operations.
//!
//! Helpers for batch inserts and for the TEXT encoding of decimals and enums.

use std::str::FromStr;

use bond_recommender_core::Result;
use rust_decimal::Decimal;

use crate::errors::StorageError;

/// Rows per batch insert.
///
/// SQLite caps the number of bound parameters per statement, so large
/// replacements are written in chunks.
pub const SQLITE_MAX_ROWS_CHUNK: usize = 500;

/// Chunk a slice into smaller slices for batch SQLite inserts.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_ROWS_CHUNK)
}

/// Parses a decimal stored as TEXT.
pub fn parse_decimal(column: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        StorageError::InvalidValue(format!("{} = \"{}\": {}", column, value, e)).into()
    })
}

pub fn parse_optional_decimal(column: &str, value: Option<&str>) -> Result<Option<Decimal>> {
    value.map(|v| parse_decimal(column, v)).transpose()
}

/// Parses an enum stored by its string code.
pub fn parse_code<T: FromStr>(column: &str, value: &str) -> Result<T> {
    T::from_str(value).map_err(|_| {
        StorageError::InvalidValue(format!("{} = \"{}\"", column, value)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bond_recommender_core::payments::PaymentType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_chunk_for_sqlite_over_limit() {
        let items: Vec<i32> = (0..1200).collect();
        let chunks: Vec<_> = chunk_for_sqlite(&items).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), SQLITE_MAX_ROWS_CHUNK);
        assert_eq!(chunks[2].len(), 200);
        assert_eq!(chunk_for_sqlite::<i32>(&[]).count(), 0);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(parse_decimal("value", "12.50").unwrap(), dec!(12.50));
        assert!(parse_decimal("value", "abc").is_err());
        assert_eq!(parse_optional_decimal("last", None).unwrap(), None);
        assert_eq!(
            parse_code::<PaymentType>("payment_type", "M").unwrap(),
            PaymentType::Maturity
        );
        assert!(parse_code::<PaymentType>("payment_type", "X").is_err());
    }
}

//! Serde helpers for the loosely typed ISS JSON values.
//!
//! ISS encodes absent dates in several ways: `null`, an empty string, or the
//! placeholder `"0000-00-00"`. All of them decode to `None`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ZERO_DATE: &str = "0000-00-00";

/// Parses a nullable ISS date string.
pub fn parse_nullable_date(raw: Option<&str>) -> Result<Option<NaiveDate>, chrono::ParseError> {
    match raw.map(str::trim) {
        None | Some("") | Some(ZERO_DATE) => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).map(Some),
    }
}

/// Parses a nullable ISS date-time string.
pub fn parse_nullable_date_time(
    raw: Option<&str>,
) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.starts_with(ZERO_DATE) => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT).map(Some),
    }
}

pub fn nullable_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    parse_nullable_date(raw.as_deref()).map_err(de::Error::custom)
}

pub fn nullable_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    parse_nullable_date_time(raw.as_deref()).map_err(de::Error::custom)
}

/// `null` decodes to the type's default instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// ISS flags are integers, nonzero meaning true.
pub fn int_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_date_accepts_absent_markers() {
        assert_eq!(parse_nullable_date(None).unwrap(), None);
        assert_eq!(parse_nullable_date(Some("")).unwrap(), None);
        assert_eq!(parse_nullable_date(Some("0000-00-00")).unwrap(), None);
        assert_eq!(
            parse_nullable_date(Some("2021-10-13")).unwrap(),
            NaiveDate::from_ymd_opt(2021, 10, 13)
        );
    }

    #[test]
    fn test_nullable_date_rejects_garbage() {
        assert!(parse_nullable_date(Some("13.10.2021")).is_err());
    }

    #[test]
    fn test_nullable_date_time() {
        let parsed = parse_nullable_date_time(Some("2021-09-14 19:00:00")).unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2021, 9, 14).and_then(|d| d.and_hms_opt(19, 0, 0))
        );
        assert_eq!(parse_nullable_date_time(Some("")).unwrap(), None);
        assert_eq!(
            parse_nullable_date_time(Some("0000-00-00 00:00:00")).unwrap(),
            None
        );
    }
}

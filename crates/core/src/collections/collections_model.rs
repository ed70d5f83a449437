//! Collection domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Error, ValidationError};
use crate::reports::BondReport;

/// Investment horizon: bonds maturing within N years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Duration {
    OneYear,
    TwoYears,
    ThreeYears,
    FourYears,
    FiveYears,
}

impl Duration {
    pub const ALL: [Duration; 5] = [
        Duration::OneYear,
        Duration::TwoYears,
        Duration::ThreeYears,
        Duration::FourYears,
        Duration::FiveYears,
    ];

    pub fn years(&self) -> u32 {
        match self {
            Duration::OneYear => 1,
            Duration::TwoYears => 2,
            Duration::ThreeYears => 3,
            Duration::FourYears => 4,
            Duration::FiveYears => 5,
        }
    }

    pub fn from_years(years: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.years() == years)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::OneYear => "1y",
            Duration::TwoYears => "2y",
            Duration::ThreeYears => "3y",
            Duration::FourYears => "4y",
            Duration::FiveYears => "5y",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| Error::Validation(ValidationError::InvalidDuration(s.to_string())))
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Public description of a collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
}

/// Ranked membership of a bond in a collection for one duration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionBond {
    pub collection_id: String,
    pub duration: Duration,
    pub bond_id: i64,
    /// 1-based rank, best rate first
    pub index: i32,
}

/// A collection's ranked bonds for one duration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListing {
    pub collection: Collection,
    pub duration: Duration,
    pub bonds: Vec<BondReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_parsing() {
        assert_eq!("3y".parse::<Duration>().unwrap(), Duration::ThreeYears);
        assert_eq!(Duration::from_years(5), Some(Duration::FiveYears));
        assert_eq!(Duration::from_years(6), None);
        assert!(matches!(
            "6y".parse::<Duration>(),
            Err(Error::Validation(ValidationError::InvalidDuration(_)))
        ));
        assert_eq!(serde_json::to_string(&Duration::OneYear).unwrap(), "\"1y\"");
        assert_eq!(
            serde_json::from_str::<Duration>("\"2y\"").unwrap(),
            Duration::TwoYears
        );
    }
}

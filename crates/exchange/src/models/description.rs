//! Security description properties (`iss.only=description`).

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::dates::parse_nullable_date;
use crate::errors::{ExchangeError, Result};

pub const ISSUE_DATE_PROPERTY: &str = "ISSUEDATE";
pub const MATURITY_DATE_PROPERTY: &str = "MATDATE";
pub const INITIAL_FACE_VALUE_PROPERTY: &str = "INITIALFACEVALUE";
pub const FACE_UNIT_PROPERTY: &str = "FACEUNIT";
pub const LISTING_LEVEL_PROPERTY: &str = "LISTLEVEL";
pub const QUALIFIED_INVESTORS_PROPERTY: &str = "ISQUALIFIEDINVESTORS";
pub const COUPON_FREQUENCY_PROPERTY: &str = "COUPONFREQUENCY";
pub const HIGH_RISK_PROPERTY: &str = "HIGHRISK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Date,
    Number,
    Boolean,
}

/// A single `{name, value, type}` row of the `description` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    value: Value,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

impl Property {
    fn raw(&self) -> Option<String> {
        match &self.value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn expect_type(&self, expected: PropertyType) -> Result<()> {
        if self.property_type == expected {
            Ok(())
        } else {
            Err(ExchangeError::WrongPropertyType(self.name.clone()))
        }
    }

    fn invalid(&self, value: &str) -> ExchangeError {
        ExchangeError::InvalidPropertyValue {
            name: self.name.clone(),
            value: value.to_string(),
        }
    }

    pub fn as_string(&self) -> Result<Option<String>> {
        self.expect_type(PropertyType::String)?;
        Ok(self.raw())
    }

    pub fn as_date(&self) -> Result<Option<NaiveDate>> {
        self.expect_type(PropertyType::Date)?;
        let raw = self.raw();
        parse_nullable_date(raw.as_deref()).map_err(|_| self.invalid(raw.as_deref().unwrap_or("")))
    }

    pub fn as_decimal(&self) -> Result<Option<Decimal>> {
        self.expect_type(PropertyType::Number)?;
        match self.raw() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => Decimal::from_str(raw.trim())
                .or_else(|_| Decimal::from_scientific(raw.trim()))
                .map(Some)
                .map_err(|_| self.invalid(&raw)),
        }
    }

    pub fn as_integer(&self) -> Result<Option<i32>> {
        self.expect_type(PropertyType::Number)?;
        match self.raw() {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<i32>().map(Some).map_err(|_| self.invalid(&raw)),
        }
    }

    /// Booleans are transmitted as integers; nonzero means true.
    pub fn as_bool(&self) -> Result<Option<bool>> {
        self.expect_type(PropertyType::Boolean)?;
        match self.raw() {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(|v| Some(v != 0))
                .map_err(|_| self.invalid(&raw)),
        }
    }
}

/// Description of a single security as a bag of typed properties.
#[derive(Debug, Clone, Default)]
pub struct SecurityDescription {
    pub properties: Vec<Property>,
}

/// Properties required to register a bond, extracted from its description.
#[derive(Debug, Clone, PartialEq)]
pub struct BondProperties {
    pub qualified_only: bool,
    pub high_risk: bool,
    pub initial_face_value: Decimal,
    pub face_unit: String,
    pub issue_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub listing_level: i32,
    pub coupon_frequency: i32,
}

impl SecurityDescription {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_qualified_investors_only(&self) -> Result<bool> {
        self.flag(QUALIFIED_INVESTORS_PROPERTY)
    }

    pub fn is_high_risk(&self) -> Result<bool> {
        self.flag(HIGH_RISK_PROPERTY)
    }

    pub fn initial_face_value(&self) -> Result<Option<Decimal>> {
        self.optional(INITIAL_FACE_VALUE_PROPERTY, Property::as_decimal)
    }

    pub fn face_unit(&self) -> Result<Option<String>> {
        self.optional(FACE_UNIT_PROPERTY, Property::as_string)
    }

    pub fn issue_date(&self) -> Result<Option<NaiveDate>> {
        self.optional(ISSUE_DATE_PROPERTY, Property::as_date)
    }

    pub fn maturity_date(&self) -> Result<Option<NaiveDate>> {
        self.optional(MATURITY_DATE_PROPERTY, Property::as_date)
    }

    pub fn listing_level(&self) -> Result<Option<i32>> {
        self.optional(LISTING_LEVEL_PROPERTY, Property::as_integer)
    }

    pub fn coupon_frequency(&self) -> Result<Option<i32>> {
        self.optional(COUPON_FREQUENCY_PROPERTY, Property::as_integer)
    }

    /// Extracts the bond registration properties.
    ///
    /// Fails with [`ExchangeError::MissingProperty`] naming the property and
    /// `isin` when the initial face value, face unit or listing level is absent.
    pub fn bond_properties(&self, isin: &str) -> Result<BondProperties> {
        let missing = |property: &str| ExchangeError::MissingProperty {
            property: property.to_string(),
            isin: isin.to_string(),
        };

        Ok(BondProperties {
            qualified_only: self.is_qualified_investors_only()?,
            high_risk: self.is_high_risk()?,
            initial_face_value: self
                .initial_face_value()?
                .ok_or_else(|| missing(INITIAL_FACE_VALUE_PROPERTY))?,
            face_unit: self.face_unit()?.ok_or_else(|| missing(FACE_UNIT_PROPERTY))?,
            issue_date: self.issue_date()?,
            maturity_date: self.maturity_date()?,
            listing_level: self
                .listing_level()?
                .ok_or_else(|| missing(LISTING_LEVEL_PROPERTY))?,
            coupon_frequency: self.coupon_frequency()?.unwrap_or(0),
        })
    }

    fn flag(&self, name: &str) -> Result<bool> {
        Ok(self.optional(name, Property::as_bool)?.unwrap_or(false))
    }

    fn optional<T>(&self, name: &str, read: fn(&Property) -> Result<Option<T>>) -> Result<Option<T>> {
        match self.property(name) {
            Some(property) => read(property),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn prop(json: &str) -> Property {
        serde_json::from_str(json).unwrap()
    }

    fn description() -> SecurityDescription {
        SecurityDescription::new(vec![
            prop(r#"{"name": "ISSUEDATE", "title": "Дата начала торгов", "value": "2019-05-22", "type": "date"}"#),
            prop(r#"{"name": "MATDATE", "title": "Дата погашения", "value": "2029-05-16", "type": "date"}"#),
            prop(r#"{"name": "INITIALFACEVALUE", "value": "1000", "type": "number"}"#),
            prop(r#"{"name": "FACEUNIT", "value": "SUR", "type": "string"}"#),
            prop(r#"{"name": "LISTLEVEL", "value": "2", "type": "number"}"#),
            prop(r#"{"name": "COUPONFREQUENCY", "value": "4", "type": "number"}"#),
            prop(r#"{"name": "ISQUALIFIEDINVESTORS", "value": "1", "type": "boolean"}"#),
        ])
    }

    #[test]
    fn test_typed_accessors() {
        let p = prop(r#"{"name": "FACEUNIT", "value": "SUR", "type": "string"}"#);
        assert_eq!(p.as_string().unwrap().as_deref(), Some("SUR"));
        assert!(matches!(p.as_date(), Err(ExchangeError::WrongPropertyType(_))));
        assert!(matches!(p.as_decimal(), Err(ExchangeError::WrongPropertyType(_))));
        assert!(matches!(p.as_bool(), Err(ExchangeError::WrongPropertyType(_))));
    }

    #[test]
    fn test_bool_property_is_integer() {
        let p = prop(r#"{"name": "HIGHRISK", "value": "0", "type": "boolean"}"#);
        assert_eq!(p.as_bool().unwrap(), Some(false));
        let p = prop(r#"{"name": "HIGHRISK", "value": "2", "type": "boolean"}"#);
        assert_eq!(p.as_bool().unwrap(), Some(true));
    }

    #[test]
    fn test_bond_properties() {
        let props = description().bond_properties("RU000A100CN3").unwrap();
        assert!(props.qualified_only);
        assert!(!props.high_risk);
        assert_eq!(props.initial_face_value, dec!(1000));
        assert_eq!(props.face_unit, "SUR");
        assert_eq!(props.issue_date, NaiveDate::from_ymd_opt(2019, 5, 22));
        assert_eq!(props.maturity_date, NaiveDate::from_ymd_opt(2029, 5, 16));
        assert_eq!(props.listing_level, 2);
        assert_eq!(props.coupon_frequency, 4);
    }

    #[test]
    fn test_missing_required_property() {
        let mut desc = description();
        desc.properties.retain(|p| p.name != FACE_UNIT_PROPERTY);

        match desc.bond_properties("RU000A100CN3") {
            Err(ExchangeError::MissingProperty { property, isin }) => {
                assert_eq!(property, "FACEUNIT");
                assert_eq!(isin, "RU000A100CN3");
            }
            other => panic!("expected MissingProperty, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_properties_default() {
        let mut desc = description();
        desc.properties.retain(|p| {
            p.name != COUPON_FREQUENCY_PROPERTY && p.name != MATURITY_DATE_PROPERTY
        });
        let props = desc.bond_properties("RU000A100CN3").unwrap();
        assert_eq!(props.coupon_frequency, 0);
        assert_eq!(props.maturity_date, None);
    }
}

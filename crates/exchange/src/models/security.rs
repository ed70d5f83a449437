use serde::Deserialize;

use super::dates::{int_flag, null_as_default};

/// Security kind as reported by `/iss/securities.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityType {
    SubfederalBond,
    OfzBond,
    ExchangeBond,
    CbBond,
    MunicipalBond,
    CorporateBond,
    IfiBond,
    EuroBond,
    /// Anything else listed on the bond market (e.g. structured notes).
    #[serde(other)]
    Other,
}

/// A row of the `securities` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Security {
    /// ISS-internal numeric identifier.
    pub id: i64,
    #[serde(rename = "secid")]
    pub security_id: String,
    #[serde(rename = "shortname", deserialize_with = "null_as_default")]
    pub short_name: String,
    #[serde(rename = "regnumber", default)]
    pub reg_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isin: String,
    #[serde(deserialize_with = "int_flag")]
    pub is_traded: bool,
    #[serde(rename = "emitent_id", default)]
    pub issuer_id: Option<i64>,
    #[serde(rename = "emitent_title", deserialize_with = "null_as_default")]
    pub issuer_name: String,
    #[serde(rename = "emitent_inn", default)]
    pub issuer_inn: Option<String>,
    #[serde(rename = "emitent_okpo", default)]
    pub issuer_okpo: Option<String>,
    #[serde(rename = "type")]
    pub security_type: SecurityType,
    #[serde(rename = "primary_boardid", deserialize_with = "null_as_default")]
    pub primary_board_id: String,
    #[serde(rename = "marketprice_boardid", deserialize_with = "null_as_default")]
    pub market_price_board_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_security() {
        let json = r#"{
            "id": 93129041,
            "secid": "RU000A100JC1",
            "shortname": "ЕАБР 1Р-04",
            "regnumber": null,
            "name": "ЕАБР БО 001Р-04",
            "isin": "RU000A100JC1",
            "is_traded": 1,
            "emitent_id": 2258,
            "emitent_title": "Евразийский банк развития",
            "emitent_inn": "9909220306",
            "emitent_okpo": null,
            "gosreg": null,
            "type": "exchange_bond",
            "group": "stock_bonds",
            "primary_boardid": "TQCB",
            "marketprice_boardid": "TQCB"
        }"#;

        let security: Security = serde_json::from_str(json).unwrap();
        assert_eq!(security.id, 93129041);
        assert_eq!(security.security_id, "RU000A100JC1");
        assert!(security.is_traded);
        assert_eq!(security.issuer_id, Some(2258));
        assert_eq!(security.issuer_inn.as_deref(), Some("9909220306"));
        assert_eq!(security.issuer_okpo, None);
        assert_eq!(security.security_type, SecurityType::ExchangeBond);
        assert_eq!(security.market_price_board_id, "TQCB");
    }

    #[test]
    fn test_unknown_security_type() {
        let ty: SecurityType = serde_json::from_str("\"stock_mortgage\"").unwrap();
        assert_eq!(ty, SecurityType::Other);
        let ty: SecurityType = serde_json::from_str("\"ofz_bond\"").unwrap();
        assert_eq!(ty, SecurityType::OfzBond);
    }
}

//! Error types for the exchange client.

use thiserror::Error;

/// Result alias used throughout the exchange crate.
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Errors that can occur while talking to the ISS service.
///
/// None of these are retried by the client. They surface to the fetch pass,
/// which aborts and leaves retrying to the next scheduled run.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The configured base URL is not an absolute http(s) URL.
    #[error("\"{url}\" is not a valid URL: {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A network error occurred while sending the request or reading the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("GET {url} -> HTTP {status}")]
    Http {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Decoder message
        message: String,
    },

    /// A security description property was read as a type it doesn't have.
    #[error("Property {0} has a wrong type")]
    WrongPropertyType(String),

    /// A security description property could not be parsed.
    #[error("Property {name} has an invalid value \"{value}\"")]
    InvalidPropertyValue {
        /// Property name
        name: String,
        /// Raw value
        value: String,
    },

    /// A property required to register a bond is absent.
    #[error("missing property {property} for {isin}")]
    MissingProperty {
        /// Property name, e.g. `FACEUNIT`
        property: String,
        /// ISIN of the security being described
        isin: String,
    },
}

impl ExchangeError {
    pub(crate) fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        ExchangeError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_display() {
        let err = ExchangeError::MissingProperty {
            property: "FACEUNIT".to_string(),
            isin: "RU000A100CN3".to_string(),
        };
        assert_eq!(err.to_string(), "missing property FACEUNIT for RU000A100CN3");
    }

    #[test]
    fn test_http_display() {
        let err = ExchangeError::Http {
            url: "https://iss.moex.com/iss/securities.json".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "GET https://iss.moex.com/iss/securities.json -> HTTP 503"
        );
    }
}

//! Shared type definitions for the OKX Web3 SDK.

use serde::{Deserialize, Serialize};

// ============================================================================
// HttpMethod
// ============================================================================

/// HTTP method of a signed request.
///
/// Only `GET` and `POST` are used by the current endpoints; `PUT` and `DELETE`
/// are accepted by the transport and signed the same way as `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as it appears in the signing payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Bar (candlestick width)
// ============================================================================

/// Candlestick bar width.
///
/// Hong Kong time is the service default for widths of six hours and above;
/// the `*Utc` variants request UTC-aligned bars instead.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Bar {
    #[serde(rename = "1s")]
    OneSecond,
    #[default]
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "3m")]
    ThreeMinutes,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1H")]
    OneHour,
    #[serde(rename = "2H")]
    TwoHours,
    #[serde(rename = "4H")]
    FourHours,
    #[serde(rename = "6H")]
    SixHours,
    #[serde(rename = "12H")]
    TwelveHours,
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "6Hutc")]
    SixHoursUtc,
    #[serde(rename = "12Hutc")]
    TwelveHoursUtc,
    #[serde(rename = "1Dutc")]
    OneDayUtc,
    #[serde(rename = "1Wutc")]
    OneWeekUtc,
    #[serde(rename = "1Mutc")]
    OneMonthUtc,
}

impl Bar {
    /// Get the string representation sent in the `bar` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneSecond => "1s",
            Self::OneMinute => "1m",
            Self::ThreeMinutes => "3m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1H",
            Self::TwoHours => "2H",
            Self::FourHours => "4H",
            Self::SixHours => "6H",
            Self::TwelveHours => "12H",
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::SixHoursUtc => "6Hutc",
            Self::TwelveHoursUtc => "12Hutc",
            Self::OneDayUtc => "1Dutc",
            Self::OneWeekUtc => "1Wutc",
            Self::OneMonthUtc => "1Mutc",
        }
    }
}

impl std::fmt::Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TokenRef
// ============================================================================

/// A token on a specific chain, as accepted by the batch endpoints.
///
/// Serializes to `{"chainIndex": "...", "tokenContractAddress": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    /// Chain identifier, e.g. `"1"` for Ethereum or `"501"` for Solana
    pub chain_index: String,
    /// Token contract address (empty string for a chain's native token on some endpoints)
    pub token_contract_address: String,
}

impl TokenRef {
    pub fn new(chain_index: impl Into<String>, token_contract_address: impl Into<String>) -> Self {
        Self {
            chain_index: chain_index.into(),
            token_contract_address: token_contract_address.into(),
        }
    }
}

/// Join chain indices into the comma-separated form the service expects.
pub fn join_chains<S: AsRef<str>>(chains: &[S]) -> String {
    chains
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_serialize() {
        assert_eq!(serde_json::to_string(&Bar::OneHour).unwrap(), r#""1H""#);
        assert_eq!(serde_json::to_string(&Bar::OneDayUtc).unwrap(), r#""1Dutc""#);
    }

    #[test]
    fn test_bar_default_and_display() {
        assert_eq!(Bar::default(), Bar::OneMinute);
        assert_eq!(Bar::FifteenMinutes.to_string(), "15m");
        assert_eq!(Bar::OneMonth.as_str(), "1M");
    }

    #[test]
    fn test_token_ref_serialize() {
        let token = TokenRef::new("1", "0xabc");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"chainIndex":"1","tokenContractAddress":"0xabc"}"#);
    }

    #[test]
    fn test_join_chains() {
        assert_eq!(join_chains(&["1", "56", "501"]), "1,56,501");
        assert_eq!(join_chains::<&str>(&[]), "");
    }

    #[test]
    fn test_http_method() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Post), reqwest::Method::POST);
    }
}

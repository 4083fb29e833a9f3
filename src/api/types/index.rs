//! Index price types.

use serde::{Deserialize, Serialize};

/// Default page size for historical index prices.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Aggregated index price of a token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexPrice {
    pub chain_index: String,
    pub token_contract_address: String,
    pub time: String,
    pub price: String,
}

/// Query parameters for historical index prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalIndexPriceParams {
    pub chain_index: String,
    /// Empty for the chain's native token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_contract_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Start time (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin: Option<i64>,
    /// End time (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Sampling period: 1m, 5m, 30m, 1h or 1d
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl HistoricalIndexPriceParams {
    pub fn new(chain_index: impl Into<String>) -> Self {
        Self {
            chain_index: chain_index.into(),
            ..Default::default()
        }
    }

    pub fn with_token(mut self, token_contract_address: impl Into<String>) -> Self {
        self.token_contract_address = Some(token_contract_address.into());
        self
    }

    pub fn with_time_range(mut self, begin: i64, end: i64) -> Self {
        self.begin = Some(begin);
        self.end = Some(end);
        self
    }

    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One sample of a historical index price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricePoint {
    pub time: String,
    pub price: String,
}

/// A page of historical index prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalIndexPrices {
    /// Cursor for the next page
    pub cursor: String,
    pub prices: Vec<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_params_serialize() {
        let params = HistoricalIndexPriceParams::new("1")
            .with_token("0xabc")
            .with_time_range(1000, 2000)
            .with_period("1h");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["chainIndex"], "1");
        assert_eq!(json["begin"], 1000);
        assert_eq!(json["period"], "1h");
        assert!(json.get("cursor").is_none());
    }

    #[test]
    fn test_historical_prices_deserialize() {
        let json = r#"{"cursor":"31","prices":[{"time":"1700863200000","price":"2046.12"}]}"#;
        let page: HistoricalIndexPrices = serde_json::from_str(json).unwrap();
        assert_eq!(page.cursor, "31");
        assert_eq!(page.prices[0].price, "2046.12");
    }
}

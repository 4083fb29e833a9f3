//! Market-data types: chains, prices, candlesticks, trades and token lookups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serialize_chains;
use crate::shared::{parse_decimal, parse_timestamp_ms, Bar};

/// Default page size for candlestick and trade queries.
pub const DEFAULT_LIMIT: u32 = 100;

/// A chain supported by one of the API families.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportedChain {
    /// Chain identifier, e.g. "1" for Ethereum
    pub chain_index: String,
    /// Display name
    #[serde(alias = "name")]
    pub chain_name: String,
    /// Short name (balance and transaction APIs)
    pub short_name: String,
    /// Chain logo URL
    #[serde(alias = "chainLogoUrl")]
    pub logo_url: String,
}

// ============================================================================
// Prices
// ============================================================================

/// Latest trade price of a token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPrice {
    pub chain_index: String,
    pub token_contract_address: String,
    /// Price timestamp (milliseconds, as string)
    pub time: String,
    /// Price in USD as decimal string
    pub price: String,
}

impl TokenPrice {
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    /// Price timestamp in milliseconds.
    pub fn time_ms(&self) -> Option<i64> {
        parse_timestamp_ms(&self.time)
    }
}

/// Price plus market statistics for a token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPriceInfo {
    pub chain_index: String,
    pub token_contract_address: String,
    pub time: String,
    pub price: String,
    pub market_cap: String,
    #[serde(rename = "priceChange5M")]
    pub price_change_5m: String,
    #[serde(rename = "priceChange1H")]
    pub price_change_1h: String,
    #[serde(rename = "priceChange4H")]
    pub price_change_4h: String,
    #[serde(rename = "priceChange24H")]
    pub price_change_24h: String,
    #[serde(rename = "volume5M")]
    pub volume_5m: String,
    #[serde(rename = "volume1H")]
    pub volume_1h: String,
    #[serde(rename = "volume4H")]
    pub volume_4h: String,
    #[serde(rename = "volume24H")]
    pub volume_24h: String,
    pub circ_supply: String,
    pub liquidity: String,
    pub holders: String,
    pub min_price: String,
    pub max_price: String,
    pub trade_num: String,
}

// ============================================================================
// Candlesticks
// ============================================================================

/// Query parameters for the candlestick endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesParams {
    /// Chain identifier (required)
    pub chain_index: String,
    /// Token contract address (required)
    pub token_contract_address: String,
    /// Return bars older than this timestamp (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    /// Return bars newer than this timestamp (ms)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    /// Bar width, defaults to 1m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<Bar>,
    /// Max results, defaults to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CandlesParams {
    /// Create new params with the required token.
    pub fn new(chain_index: impl Into<String>, token_contract_address: impl Into<String>) -> Self {
        Self {
            chain_index: chain_index.into(),
            token_contract_address: token_contract_address.into(),
            ..Default::default()
        }
    }

    pub fn with_bar(mut self, bar: Bar) -> Self {
        self.bar = Some(bar);
        self
    }

    /// Only bars older than `after` (ms).
    pub fn with_after(mut self, after: i64) -> Self {
        self.after = Some(after);
        self
    }

    /// Only bars newer than `before` (ms).
    pub fn with_before(mut self, before: i64) -> Self {
        self.before = Some(before);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One candlestick.
///
/// The service sends each bar as an array of strings:
/// `[ts, open, high, low, close, volume, volumeUsd, confirm]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Candle {
    /// Bar open time (milliseconds)
    pub ts: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    /// Volume in token units
    pub volume: String,
    /// Volume in USD
    pub volume_usd: String,
    /// `false` while the bar is still forming
    pub confirmed: bool,
}

impl TryFrom<Vec<String>> for Candle {
    type Error = String;

    fn try_from(row: Vec<String>) -> Result<Self, Self::Error> {
        if row.len() < 6 {
            return Err(format!(
                "candle row needs at least 6 fields, got {}",
                row.len()
            ));
        }
        let mut fields = row.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        let ts_raw = next();
        let ts = ts_raw
            .parse::<i64>()
            .map_err(|_| format!("invalid candle timestamp: {:?}", ts_raw))?;

        Ok(Candle {
            ts,
            open: next(),
            high: next(),
            low: next(),
            close: next(),
            volume: next(),
            volume_usd: next(),
            confirmed: next() == "1",
        })
    }
}

impl Candle {
    pub fn close_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.close)
    }
}

// ============================================================================
// Trades
// ============================================================================

/// Query parameters for recent trades.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesParams {
    /// Chain identifier (required)
    pub chain_index: String,
    /// Token contract address (required)
    pub token_contract_address: String,
    /// Pagination: trades older than this trade ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Max results, defaults to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TradesParams {
    /// Create new params with the required token.
    pub fn new(chain_index: impl Into<String>, token_contract_address: impl Into<String>) -> Self {
        Self {
            chain_index: chain_index.into(),
            token_contract_address: token_contract_address.into(),
            ..Default::default()
        }
    }

    /// Set pagination cursor.
    pub fn with_after(mut self, trade_id: impl Into<String>) -> Self {
        self.after = Some(trade_id.into());
        self
    }

    /// Set result limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Token leg of a trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangedTokenInfo {
    pub amount: String,
    pub token_symbol: String,
    pub token_contract_address: String,
}

/// A DEX trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub id: String,
    pub chain_index: String,
    pub token_contract_address: String,
    pub tx_hash_url: String,
    pub user_address: String,
    pub dex_name: String,
    pub pool_logo_url: String,
    /// "buy" or "sell"
    #[serde(rename = "type")]
    pub side: String,
    pub changed_token_info: Vec<ChangedTokenInfo>,
    pub price: String,
    /// Trade value in USD
    pub volume: String,
    /// Execution time (milliseconds, as string)
    pub time: String,
    pub is_filtered: String,
}

impl Trade {
    pub fn time_ms(&self) -> Option<i64> {
        parse_timestamp_ms(&self.time)
    }
}

// ============================================================================
// Token lookups
// ============================================================================

/// Token metadata returned by search and basic-info lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenInfo {
    pub chain_index: String,
    pub token_contract_address: String,
    pub token_symbol: String,
    pub token_name: String,
    pub token_logo_url: String,
    /// Token decimals, as string
    pub decimal: String,
    pub price: String,
    /// 24h price change (percent)
    pub change: String,
    pub market_cap: String,
    pub liquidity: String,
    pub holders: String,
}

/// A holder of a token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenHolder {
    pub holder_wallet_address: String,
    pub hold_amount: String,
}

/// Query parameters for the token ranking list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRankingParams {
    /// Chains to rank over (required, joined with commas)
    #[serde(serialize_with = "serialize_chains")]
    pub chains: Vec<String>,
    /// Ranking key: 2 price change, 5 volume, 6 market cap
    pub sort_by: String,
    /// Window: 1 = 5m, 2 = 1h, 3 = 4h, 4 = 24h
    pub time_frame: String,
}

impl TokenRankingParams {
    pub fn new<S: Into<String>>(chains: impl IntoIterator<Item = S>) -> Self {
        Self {
            chains: chains.into_iter().map(Into::into).collect(),
            sort_by: "5".to_string(),
            time_frame: "4".to_string(),
        }
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn with_time_frame(mut self, time_frame: impl Into<String>) -> Self {
        self.time_frame = time_frame.into();
        self
    }
}

/// Entry of the token ranking list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedToken {
    pub chain_index: String,
    pub token_contract_address: String,
    pub token_symbol: String,
    pub token_logo_url: String,
    pub price: String,
    pub change: String,
    pub volume: String,
    pub market_cap: String,
    pub liquidity: String,
    pub holders: String,
    pub unique_traders: String,
    pub txs: String,
    pub first_trade_time: String,
}

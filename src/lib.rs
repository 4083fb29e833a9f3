//! # OKX Web3 Market SDK
//!
//! A Rust client for the OKX Web3 market-data API: token prices,
//! candlesticks, trades, index prices, wallet balances and transaction history.
//!
//! ## Modules
//!
//! - [`auth`]: Credentials and HMAC-SHA256 request signing
//! - [`api`]: Signed REST transport and one method per endpoint
//! - [`shared`]: Types shared by both (methods, bar widths, token references)
//! - [`network`]: Default base URL and timeout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use okx_web3_market::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OkxApiClient::from_env()?;
//!
//!     let prices = client
//!         .get_batch_token_prices(&[
//!             TokenRef::new("1", "0xdac17f958d2ee523a2206206994597c13d831ec7"),
//!             TokenRef::new("501", "So11111111111111111111111111111111111111112"),
//!         ])
//!         .await?;
//!     for price in prices {
//!         println!("{} on chain {}: {}", price.token_contract_address, price.chain_index, price.price);
//!     }
//!
//!     let candles = client
//!         .get_candles(CandlesParams::new("1", "0xdac17f958d2ee523a2206206994597c13d831ec7").with_bar(Bar::OneHour))
//!         .await?;
//!     println!("Got {} candles", candles.len());
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared types used by the signer and the REST client.
pub mod shared;

/// Network constants (base URL, timeout).
pub mod network;

/// Credentials and request signing.
pub mod auth;

/// REST API client for market data, balances and transaction history.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use okx_web3_market::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        ApiError, ApiResult, OkxApiClient, OkxApiClientBuilder, QueryParams, RequestSpec,
        // Request params
        CandlesParams, HistoricalIndexPriceParams, TokenRankingParams, TotalValueParams,
        TradesParams, TransactionsParams,
        // Response types
        Candle, HistoricalIndexPrices, IndexPrice, PricePoint, RankedToken, SupportedChain,
        TokenAsset, TokenAssets, TokenHolder, TokenInfo, TokenPrice, TokenPriceInfo, TotalValue,
        Trade, Transaction, TransactionDetail, TransactionsPage,
    };

    // Auth module exports
    pub use crate::auth::{AuthError, AuthResult, Credentials};

    // Network constants
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};

    // Shared types
    pub use crate::shared::{parse_decimal, Bar, HttpMethod, TokenRef};
}

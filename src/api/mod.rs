//! REST API client module for the OKX Web3 market-data service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use okx_web3_market::api::{OkxApiClient, TradesParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OKX_API_KEY, OKX_SECRET_KEY, OKX_API_PASSPHRASE, OKX_PROJECT_ID
//!     let client = OkxApiClient::from_env()?;
//!
//!     let chains = client.get_supported_chains().await?;
//!     println!("{} chains supported", chains.len());
//!
//!     let trades = client.get_trades(TradesParams::new("1", "0xdac17f958d2ee523a2206206994597c13d831ec7")).await?;
//!     println!("Latest trade: {:?}", trades.first());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use okx_web3_market::api::OkxApiClient;
//! use okx_web3_market::auth::Credentials;
//! use std::time::Duration;
//!
//! let credentials = Credentials::new("api-key", "secret", "passphrase", "project-id")?;
//! let client = OkxApiClient::builder(credentials)
//!     .base_url("https://web3.okx.com")
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//! ```
//!
//! # Raw Requests
//!
//! Endpoints without a dedicated method can be called through the transport
//! directly:
//!
//! ```rust,ignore
//! use okx_web3_market::api::{QueryParams, RequestSpec};
//!
//! let query = QueryParams::new().with("chainIndex", "1");
//! let value: serde_json::Value = client.get("/api/v5/dex/aggregator/all-tokens", query).await?;
//!
//! let spec = RequestSpec::post("/api/v5/dex/market/price").with_body(&tokens)?;
//! let prices: Vec<TokenPrice> = client.send(spec).await?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`:
//!
//! ```rust,ignore
//! use okx_web3_market::api::ApiError;
//!
//! match client.get_supported_chains().await {
//!     Ok(chains) => println!("{} chains", chains.len()),
//!     Err(ApiError::Okx { code, msg }) => println!("rejected: {} {}", code, msg),
//!     Err(ApiError::Http { status, body }) => println!("HTTP {}: {}", status, body),
//!     Err(ApiError::Timeout { .. }) => println!("timed out"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod query;
pub mod types;

// Re-export main types for convenience
pub use client::{OkxApiClient, OkxApiClientBuilder, RequestSpec};
pub use envelope::{decode_body, Decoded, ResponseEnvelope};
pub use error::{ApiError, ApiResult};
pub use query::{build_query, QueryParams};
pub use types::*;

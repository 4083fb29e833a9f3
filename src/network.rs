//! Network constants for the OKX Web3 API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://web3.okx.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

//! OKX Web3 REST API client implementation.
//!
//! The [`OkxApiClient`] signs every request, dispatches it with a bounded
//! timeout and unwraps the response envelope into a typed payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use okx_web3_market::api::{CandlesParams, OkxApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OkxApiClient::from_env()?;
//!
//!     let prices = client.get_token_price("1", "0xdac17f958d2ee523a2206206994597c13d831ec7").await?;
//!     println!("USDT: {}", prices[0].price);
//!
//!     let candles = client.get_candles(CandlesParams::new("1", "0xdac17f958d2ee523a2206206994597c13d831ec7")).await?;
//!     println!("Got {} candles", candles.len());
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::envelope::decode_body;
use crate::api::error::{ApiError, ApiResult};
use crate::api::query::QueryParams;
use crate::api::types::*;
use crate::auth::{sign_request, timestamp, Credentials};
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MS};
use crate::shared::{join_chains, Bar, HttpMethod, TokenRef};

// Header names are case-insensitive on the wire; the service documents them
// as `OK-ACCESS-KEY` etc.
const OK_ACCESS_KEY: HeaderName = HeaderName::from_static("ok-access-key");
const OK_ACCESS_SIGN: HeaderName = HeaderName::from_static("ok-access-sign");
const OK_ACCESS_TIMESTAMP: HeaderName = HeaderName::from_static("ok-access-timestamp");
const OK_ACCESS_PASSPHRASE: HeaderName = HeaderName::from_static("ok-access-passphrase");
const OK_ACCESS_PROJECT: HeaderName = HeaderName::from_static("ok-access-project");

/// Endpoint paths.
mod paths {
    pub const MARKET_SUPPORTED_CHAIN: &str = "/api/v5/dex/market/supported/chain";
    pub const MARKET_PRICE: &str = "/api/v5/dex/market/price";
    pub const MARKET_PRICE_INFO: &str = "/api/v5/dex/market/price-info";
    pub const MARKET_CANDLES: &str = "/api/v5/dex/market/candles";
    pub const MARKET_HISTORICAL_CANDLES: &str = "/api/v5/dex/market/historical-candles";
    pub const MARKET_TRADES: &str = "/api/v5/dex/market/trades";
    pub const TOKEN_SEARCH: &str = "/api/v5/dex/market/token/search";
    pub const TOKEN_BASIC_INFO: &str = "/api/v5/dex/market/token/basic-info";
    pub const TOKEN_HOLDER: &str = "/api/v5/dex/market/token/holder";
    pub const TOKEN_TOPLIST: &str = "/api/v5/dex/market/token/toplist";
    pub const INDEX_CURRENT_PRICE: &str = "/api/v5/dex/index/current-price";
    pub const INDEX_HISTORICAL_PRICE: &str = "/api/v5/dex/index/historical-price";
    pub const BALANCE_SUPPORTED_CHAIN: &str = "/api/v5/dex/balance/supported/chain";
    pub const BALANCE_TOTAL_VALUE: &str = "/api/v5/dex/balance/total-value-by-address";
    pub const BALANCE_ALL_TOKENS: &str = "/api/v5/dex/balance/all-token-balances-by-address";
    pub const BALANCE_SPECIFIC_TOKENS: &str = "/api/v5/dex/balance/token-balances-by-address";
    pub const TX_SUPPORTED_CHAIN: &str = "/api/v5/dex/post-transaction/supported/chain";
    pub const TX_BY_ADDRESS: &str = "/api/v5/dex/post-transaction/transactions-by-address";
    pub const TX_DETAIL: &str = "/api/v5/dex/post-transaction/transaction-detail-by-txhash";
}

/// Default `assetType` for total-value queries (all assets).
const DEFAULT_ASSET_TYPE: &str = "0";

// ============================================================================
// RequestSpec
// ============================================================================

/// A request to sign and send: method, path, query and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    /// Path starting with `/`, without query suffix
    pub path: String,
    pub query: QueryParams,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serialize `body` to JSON. The resulting text is both sent and signed.
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.body = Some(text);
        Ok(self)
    }
}

/// A fully signed request, ready to dispatch.
#[derive(Debug)]
struct PreparedRequest {
    method: HttpMethod,
    path: String,
    url: String,
    query_string: String,
    body: Option<String>,
    headers: HeaderMap,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for configuring [`OkxApiClient`].
#[derive(Debug, Clone)]
pub struct OkxApiClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
}

impl OkxApiClientBuilder {
    /// Create a new builder with default base URL and timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the base URL. A trailing `/` is removed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout, covering connection setup and body transfer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero timeout, a base URL that is not
    /// an absolute http(s) URL, or credentials that cannot be sent as headers.
    pub fn build(self) -> ApiResult<OkxApiClient> {
        if self.timeout.is_zero() {
            return Err(ApiError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let parsed = Url::parse(&self.base_url).map_err(|e| {
            ApiError::Configuration(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let base_headers = credential_headers(&self.credentials)?;

        let http_client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(OkxApiClient {
            http_client,
            base_url: self.base_url,
            timeout: self.timeout,
            credentials: Arc::new(self.credentials),
            base_headers,
        })
    }
}

/// Headers that are identical on every request.
fn credential_headers(credentials: &Credentials) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(OK_ACCESS_KEY, header_value("api_key", credentials.api_key(), true)?);
    headers.insert(
        OK_ACCESS_PASSPHRASE,
        header_value("passphrase", credentials.passphrase(), true)?,
    );
    headers.insert(
        OK_ACCESS_PROJECT,
        header_value("project_id", credentials.project_id(), false)?,
    );
    Ok(headers)
}

fn header_value(name: &str, value: &str, sensitive: bool) -> ApiResult<HeaderValue> {
    let mut header = HeaderValue::from_str(value).map_err(|_| {
        crate::auth::AuthError::InvalidCredential(format!("{} is not a valid header value", name))
    })?;
    header.set_sensitive(sensitive);
    Ok(header)
}

// ============================================================================
// Client
// ============================================================================

/// OKX Web3 REST API client.
///
/// Holds no per-call state: one instance can serve any number of concurrent
/// requests, and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OkxApiClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
    credentials: Arc<Credentials>,
    base_headers: HeaderMap,
}

impl OkxApiClient {
    /// Create a client with the default base URL and a 10s timeout.
    pub fn new(credentials: Credentials) -> ApiResult<Self> {
        OkxApiClientBuilder::new(credentials).build()
    }

    /// Create a client with credentials from `OKX_API_KEY`, `OKX_SECRET_KEY`,
    /// `OKX_API_PASSPHRASE` and `OKX_PROJECT_ID`.
    ///
    /// # Errors
    ///
    /// Fails immediately if any variable is missing; no request is attempted.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(credentials: Credentials) -> OkxApiClientBuilder {
        OkxApiClientBuilder::new(credentials)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// Sign and send a request, returning the decoded payload.
    ///
    /// Exactly one HTTP call is made. Non-2xx responses fail with
    /// [`ApiError::Http`] without parsing the body; a 2xx body is decoded as a
    /// `{code, msg, data}` envelope when it has a `code` field, or used as the
    /// payload directly otherwise.
    pub async fn send<T: DeserializeOwned>(&self, spec: RequestSpec) -> ApiResult<T> {
        let prepared = self.prepare(spec, &timestamp())?;
        self.dispatch(prepared).await
    }

    /// Signed GET with query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> ApiResult<T> {
        self.send(RequestSpec::get(path).with_query(query)).await
    }

    /// Signed POST with a JSON body and optional query parameters.
    ///
    /// Only the body is signed; see [`signing_payload`](crate::auth::signing_payload).
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        query: Option<QueryParams>,
    ) -> ApiResult<T> {
        let spec = RequestSpec::post(path)
            .with_query(query.unwrap_or_default())
            .with_body(body)?;
        self.send(spec).await
    }

    /// Canonicalize, sign and assemble headers for `spec` at `timestamp`.
    fn prepare(&self, spec: RequestSpec, timestamp: &str) -> ApiResult<PreparedRequest> {
        if !spec.path.starts_with('/') {
            return Err(ApiError::InvalidParameter(format!(
                "path must start with '/': {}",
                spec.path
            )));
        }
        if spec.method == HttpMethod::Get && spec.body.is_some() {
            return Err(ApiError::InvalidParameter(
                "GET requests cannot carry a body".to_string(),
            ));
        }

        let query_string = spec.query.to_query_string()?;
        let url = format!("{}{}{}", self.base_url, spec.path, query_string);

        let signature = sign_request(
            timestamp,
            spec.method,
            &spec.path,
            &query_string,
            spec.body.as_deref().unwrap_or(""),
            self.credentials.secret_key(),
        );

        let mut headers = self.base_headers.clone();
        headers.insert(OK_ACCESS_SIGN, header_value("signature", &signature, true)?);
        headers.insert(OK_ACCESS_TIMESTAMP, header_value("timestamp", timestamp, false)?);

        Ok(PreparedRequest {
            method: spec.method,
            path: spec.path,
            url,
            query_string,
            body: spec.body,
            headers,
        })
    }

    async fn dispatch<T: DeserializeOwned>(&self, prepared: PreparedRequest) -> ApiResult<T> {
        tracing::debug!(
            method = %prepared.method,
            path = %prepared.path,
            query = %prepared.query_string,
            "Sending signed request"
        );

        let mut request = self
            .http_client
            .request(prepared.method.into(), &prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(
            status = status.as_u16(),
            path = %prepared.path,
            bytes = text.len(),
            "Received response"
        );

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_body(&text)
    }

    fn transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            ApiError::Request(error)
        }
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    fn validate_non_empty(value: &str, field_name: &str) -> ApiResult<()> {
        if value.trim().is_empty() {
            return Err(ApiError::InvalidParameter(format!(
                "{} cannot be empty",
                field_name
            )));
        }
        Ok(())
    }

    fn validate_tokens(tokens: &[TokenRef]) -> ApiResult<()> {
        if tokens.is_empty() {
            return Err(ApiError::InvalidParameter(
                "at least one token is required".to_string(),
            ));
        }
        for token in tokens {
            Self::validate_non_empty(&token.chain_index, "chain_index")?;
        }
        Ok(())
    }

    fn validate_chains<S: AsRef<str>>(chains: &[S]) -> ApiResult<()> {
        if chains.is_empty() {
            return Err(ApiError::InvalidParameter(
                "at least one chain is required".to_string(),
            ));
        }
        for chain in chains {
            Self::validate_non_empty(chain.as_ref(), "chain index")?;
        }
        Ok(())
    }

    fn validate_limit(limit: Option<u32>) -> ApiResult<()> {
        if limit == Some(0) {
            return Err(ApiError::InvalidParameter(
                "limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// Chains supported by the market API.
    pub async fn get_supported_chains(&self) -> ApiResult<Vec<SupportedChain>> {
        self.get(paths::MARKET_SUPPORTED_CHAIN, QueryParams::new())
            .await
    }

    /// Latest price of a single token.
    pub async fn get_token_price(
        &self,
        chain_index: &str,
        token_contract_address: &str,
    ) -> ApiResult<Vec<TokenPrice>> {
        self.get_batch_token_prices(&[TokenRef::new(chain_index, token_contract_address)])
            .await
    }

    /// Latest prices of several tokens in one request.
    pub async fn get_batch_token_prices(&self, tokens: &[TokenRef]) -> ApiResult<Vec<TokenPrice>> {
        Self::validate_tokens(tokens)?;
        self.post(paths::MARKET_PRICE, tokens, None).await
    }

    /// Price, market cap, volume and price changes for several tokens.
    pub async fn get_token_price_info(
        &self,
        tokens: &[TokenRef],
    ) -> ApiResult<Vec<TokenPriceInfo>> {
        Self::validate_tokens(tokens)?;
        self.post(paths::MARKET_PRICE_INFO, tokens, None).await
    }

    /// Recent candlesticks. Defaults: `bar = 1m`, `limit = 100`.
    pub async fn get_candles(&self, params: CandlesParams) -> ApiResult<Vec<Candle>> {
        self.candles(paths::MARKET_CANDLES, params).await
    }

    /// Historical candlesticks. Defaults: `bar = 1m`, `limit = 100`.
    pub async fn get_historical_candles(&self, params: CandlesParams) -> ApiResult<Vec<Candle>> {
        self.candles(paths::MARKET_HISTORICAL_CANDLES, params)
            .await
    }

    async fn candles(&self, path: &str, params: CandlesParams) -> ApiResult<Vec<Candle>> {
        Self::validate_non_empty(&params.chain_index, "chain_index")?;
        Self::validate_non_empty(&params.token_contract_address, "token_contract_address")?;
        Self::validate_limit(params.limit)?;

        let query = QueryParams::from_serialize(&params)?
            .with_default("bar", Bar::default())
            .with_default("limit", DEFAULT_LIMIT);
        self.get(path, query).await
    }

    /// Recent trades of a token. Default `limit = 100`.
    pub async fn get_trades(&self, params: TradesParams) -> ApiResult<Vec<Trade>> {
        Self::validate_non_empty(&params.chain_index, "chain_index")?;
        Self::validate_non_empty(&params.token_contract_address, "token_contract_address")?;
        Self::validate_limit(params.limit)?;

        let query = QueryParams::from_serialize(&params)?.with_default("limit", DEFAULT_LIMIT);
        self.get(paths::MARKET_TRADES, query).await
    }

    /// Search tokens by name, symbol or address.
    pub async fn search_tokens<S: AsRef<str>>(
        &self,
        chains: &[S],
        search: &str,
    ) -> ApiResult<Vec<TokenInfo>> {
        Self::validate_chains(chains)?;
        Self::validate_non_empty(search, "search")?;

        let query = QueryParams::new()
            .with("chains", join_chains(chains))
            .with("search", search);
        self.get(paths::TOKEN_SEARCH, query).await
    }

    /// Basic metadata for several tokens.
    pub async fn get_token_basic_info(&self, tokens: &[TokenRef]) -> ApiResult<Vec<TokenInfo>> {
        Self::validate_tokens(tokens)?;
        self.post(paths::TOKEN_BASIC_INFO, tokens, None).await
    }

    /// Top holders of a token.
    pub async fn get_token_holders(
        &self,
        chain_index: &str,
        token_contract_address: &str,
    ) -> ApiResult<Vec<TokenHolder>> {
        Self::validate_non_empty(chain_index, "chain_index")?;
        Self::validate_non_empty(token_contract_address, "token_contract_address")?;

        let query = QueryParams::new()
            .with("chainIndex", chain_index)
            .with("tokenContractAddress", token_contract_address);
        self.get(paths::TOKEN_HOLDER, query).await
    }

    /// Token ranking list.
    pub async fn get_token_ranking(
        &self,
        params: TokenRankingParams,
    ) -> ApiResult<Vec<RankedToken>> {
        Self::validate_chains(&params.chains)?;
        let query = QueryParams::from_serialize(&params)?;
        self.get(paths::TOKEN_TOPLIST, query).await
    }

    // =========================================================================
    // Index price endpoints
    // =========================================================================

    /// Current index prices of several tokens.
    pub async fn get_index_prices(&self, tokens: &[TokenRef]) -> ApiResult<Vec<IndexPrice>> {
        Self::validate_tokens(tokens)?;
        self.post(paths::INDEX_CURRENT_PRICE, tokens, None).await
    }

    /// Historical index prices. Default `limit = 50`.
    pub async fn get_historical_index_price(
        &self,
        params: HistoricalIndexPriceParams,
    ) -> ApiResult<Vec<HistoricalIndexPrices>> {
        Self::validate_non_empty(&params.chain_index, "chain_index")?;
        Self::validate_limit(params.limit)?;

        let query =
            QueryParams::from_serialize(&params)?.with_default("limit", DEFAULT_HISTORY_LIMIT);
        self.get(paths::INDEX_HISTORICAL_PRICE, query).await
    }

    // =========================================================================
    // Balance endpoints
    // =========================================================================

    /// Chains supported by the balance API.
    pub async fn get_balance_supported_chains(&self) -> ApiResult<Vec<SupportedChain>> {
        self.get(paths::BALANCE_SUPPORTED_CHAIN, QueryParams::new())
            .await
    }

    /// Total value of an address. Default `assetType = "0"` (all assets).
    pub async fn get_total_value(&self, params: TotalValueParams) -> ApiResult<Vec<TotalValue>> {
        Self::validate_non_empty(&params.address, "address")?;
        Self::validate_chains(&params.chains)?;

        let query =
            QueryParams::from_serialize(&params)?.with_default("assetType", DEFAULT_ASSET_TYPE);
        self.get(paths::BALANCE_TOTAL_VALUE, query).await
    }

    /// All token balances of an address on the given chains.
    pub async fn get_all_token_balances<S: AsRef<str>>(
        &self,
        address: &str,
        chains: &[S],
        exclude_risk_token: Option<bool>,
    ) -> ApiResult<Vec<TokenAssets>> {
        Self::validate_non_empty(address, "address")?;
        Self::validate_chains(chains)?;

        let query = QueryParams::from_serialize(&AllTokenBalancesQuery {
            address: address.to_string(),
            chains: chains.iter().map(|c| c.as_ref().to_string()).collect(),
            exclude_risk_token,
        })?;
        self.get(paths::BALANCE_ALL_TOKENS, query).await
    }

    /// Balances of specific tokens held by an address.
    pub async fn get_specific_token_balances(
        &self,
        address: &str,
        tokens: &[TokenRef],
        exclude_risk_token: Option<bool>,
    ) -> ApiResult<Vec<TokenAssets>> {
        Self::validate_non_empty(address, "address")?;
        Self::validate_tokens(tokens)?;

        let body = SpecificTokenBalancesRequest {
            address,
            token_contract_addresses: tokens,
            exclude_risk_token,
        };
        self.post(paths::BALANCE_SPECIFIC_TOKENS, &body, None).await
    }

    // =========================================================================
    // Transaction history endpoints
    // =========================================================================

    /// Chains supported by the transaction history API.
    pub async fn get_transaction_supported_chains(&self) -> ApiResult<Vec<SupportedChain>> {
        self.get(paths::TX_SUPPORTED_CHAIN, QueryParams::new()).await
    }

    /// Transaction history of an address. Default `limit = 100`.
    pub async fn get_transactions_by_address(
        &self,
        params: TransactionsParams,
    ) -> ApiResult<Vec<TransactionsPage>> {
        Self::validate_non_empty(&params.address, "address")?;
        Self::validate_chains(&params.chains)?;
        Self::validate_limit(params.limit)?;

        let query = QueryParams::from_serialize(&params)?.with_default("limit", DEFAULT_LIMIT);
        self.get(paths::TX_BY_ADDRESS, query).await
    }

    /// Detail of one transaction.
    pub async fn get_transaction_detail(
        &self,
        chain_index: &str,
        tx_hash: &str,
    ) -> ApiResult<Vec<TransactionDetail>> {
        Self::validate_non_empty(chain_index, "chain_index")?;
        Self::validate_non_empty(tx_hash, "tx_hash")?;

        let query = QueryParams::new()
            .with("chainIndex", chain_index)
            .with("txHash", tx_hash);
        self.get(paths::TX_DETAIL, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signing_payload;

    const TS: &str = "2023-01-01T00:00:00.000Z";

    fn credentials() -> Credentials {
        Credentials::new("key", "secret", "pass", "project").unwrap()
    }

    fn client() -> OkxApiClient {
        OkxApiClient::new(credentials()).unwrap()
    }

    #[test]
    fn test_client_defaults() {
        let client = client();
        assert_eq!(client.base_url(), "https://web3.okx.com");
        assert_eq!(client.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_client_builder() {
        let client = OkxApiClient::builder(credentials())
            .base_url("http://localhost:8080/")
            .timeout_ms(2_500)
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.timeout(), Duration::from_millis(2_500));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let zero = OkxApiClient::builder(credentials()).timeout_ms(0).build();
        assert!(matches!(zero, Err(ApiError::Configuration(_))));

        let relative = OkxApiClient::builder(credentials()).base_url("web3.okx.com").build();
        assert!(matches!(relative, Err(ApiError::Configuration(_))));

        let ftp = OkxApiClient::builder(credentials()).base_url("ftp://web3.okx.com").build();
        assert!(matches!(ftp, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn test_prepare_get() {
        let client = client();
        let spec = RequestSpec::get("/api/v5/dex/market/candles").with_query(
            QueryParams::new()
                .with("limit", 100)
                .with("chainIndex", "1")
                .with("bar", "1m"),
        );
        let prepared = client.prepare(spec, TS).unwrap();

        assert_eq!(prepared.query_string, "?bar=1m&chainIndex=1&limit=100");
        assert_eq!(
            prepared.url,
            "https://web3.okx.com/api/v5/dex/market/candles?bar=1m&chainIndex=1&limit=100"
        );
        assert!(prepared.body.is_none());

        let expected = sign_request(
            TS,
            HttpMethod::Get,
            "/api/v5/dex/market/candles",
            "?bar=1m&chainIndex=1&limit=100",
            "",
            "secret",
        );
        assert_eq!(prepared.headers[OK_ACCESS_SIGN], expected.as_str());
        assert_eq!(prepared.headers[OK_ACCESS_TIMESTAMP], TS);
        assert_eq!(prepared.headers[OK_ACCESS_KEY], "key");
        assert_eq!(prepared.headers[OK_ACCESS_PASSPHRASE], "pass");
        assert_eq!(prepared.headers[OK_ACCESS_PROJECT], "project");
        assert_eq!(prepared.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_prepare_post_signs_body_not_query() {
        let client = client();
        let spec = RequestSpec::post("/api/v5/dex/market/price")
            .with_query(QueryParams::new().with("ignored", "yes"))
            .with_body(&[TokenRef::new("1", "0xabc")])
            .unwrap();
        let prepared = client.prepare(spec, TS).unwrap();

        let body = r#"[{"chainIndex":"1","tokenContractAddress":"0xabc"}]"#;
        assert_eq!(prepared.body.as_deref(), Some(body));
        assert!(prepared.url.ends_with("/api/v5/dex/market/price?ignored=yes"));

        let payload = signing_payload(TS, HttpMethod::Post, "/api/v5/dex/market/price", "", body);
        assert_eq!(
            prepared.headers[OK_ACCESS_SIGN],
            crate::auth::sign(&payload, "secret").as_str()
        );
    }

    #[test]
    fn test_prepare_rejects_invalid_specs() {
        let client = client();

        let get_with_body = RequestSpec::get("/x").with_body(&serde_json::json!({})).unwrap();
        assert!(matches!(
            client.prepare(get_with_body, TS),
            Err(ApiError::InvalidParameter(_))
        ));

        assert!(matches!(
            client.prepare(RequestSpec::get("no-slash"), TS),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sensitive_headers_are_marked() {
        let prepared = client().prepare(RequestSpec::get("/x"), TS).unwrap();
        assert!(prepared.headers[OK_ACCESS_KEY].is_sensitive());
        assert!(prepared.headers[OK_ACCESS_PASSPHRASE].is_sensitive());
        assert!(prepared.headers[OK_ACCESS_SIGN].is_sensitive());
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let credentials = Credentials::new("my-key", "my-secret", "my-pass", "proj").unwrap();
        let client = OkxApiClient::new(credentials).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("my-key"));
        assert!(!debug.contains("my-secret"));
        assert!(!debug.contains("my-pass"));
        assert!(debug.contains("proj"));
    }

    #[test]
    fn test_validation_helpers() {
        assert!(OkxApiClient::validate_tokens(&[]).is_err());
        assert!(OkxApiClient::validate_tokens(&[TokenRef::new("", "0x")]).is_err());
        assert!(OkxApiClient::validate_tokens(&[TokenRef::new("1", "")]).is_ok());
        assert!(OkxApiClient::validate_chains::<&str>(&[]).is_err());
        assert!(OkxApiClient::validate_chains(&["1", "56"]).is_ok());
        assert!(OkxApiClient::validate_limit(Some(0)).is_err());
        assert!(OkxApiClient::validate_limit(None).is_ok());
    }

    #[tokio::test]
    async fn test_endpoint_validation_happens_before_network() {
        // Unroutable base URL: any network attempt would fail differently
        let client = OkxApiClient::builder(credentials())
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();

        let err = client.get_batch_token_prices(&[]).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));

        let err = client
            .get_total_value(TotalValueParams::new("0xwallet", Vec::<String>::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));

        let err = client
            .get_candles(CandlesParams::new("1", "0xabc").with_limit(0))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
    }
}

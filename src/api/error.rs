//! API error types for the OKX Web3 REST client.

use thiserror::Error;

use crate::auth::AuthError;

/// Error type for the OKX Web3 REST client.
///
/// Every failure is surfaced to the caller as-is; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration (base URL, timeout)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or invalid credentials
    #[error("Configuration error: {0}")]
    Auth(#[from] AuthError),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Non-2xx response; `body` is the raw response text
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body was not JSON, or did not match the expected payload type
    #[error("Decode error: {message}")]
    Decode { message: String, raw: String },

    /// The service answered with an envelope whose `code` is not `"0"`
    #[error("OKXError {code}: {msg}")]
    Okx { code: String, msg: String },

    /// Other transport failures (connection refused, DNS, TLS)
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    /// Request body or query could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Invalid parameter provided to an endpoint method
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// HTTP status code, for [`ApiError::Http`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Service error code, for [`ApiError::Okx`].
    pub fn okx_code(&self) -> Option<&str> {
        match self {
            ApiError::Okx { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Raw response text, for errors that carry one.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            ApiError::Http { body, .. } => Some(body),
            ApiError::Decode { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }

    /// True for errors raised before any request was sent.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::Configuration(_) | ApiError::Auth(_))
    }

    pub(crate) fn decode(message: impl std::fmt::Display, raw: &str) -> Self {
        ApiError::Decode {
            message: message.to_string(),
            raw: raw.to_string(),
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

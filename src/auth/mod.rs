//! Authentication for the OKX Web3 API.
//!
//! Every request carries four credential headers plus an HMAC-SHA256 signature
//! computed over a canonical signing payload.
//!
//! # Signing Flow
//!
//! 1. Take a fresh ISO-8601 timestamp with millisecond precision
//! 2. Build the payload `timestamp + METHOD + path + (query string | body)`
//! 3. HMAC-SHA256 the payload with the secret key
//! 4. Base64 encode the digest into the `OK-ACCESS-SIGN` header

pub mod credentials;
pub mod signer;

use thiserror::Error;

pub use credentials::{
    load_credentials, Credentials, ENV_API_KEY, ENV_PASSPHRASE, ENV_PROJECT_ID, ENV_SECRET_KEY,
};
pub use signer::{sign, sign_request, signing_payload, timestamp};

/// Credential errors, raised when a client is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required credential was absent or empty
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// A credential contains characters that cannot be sent in a header
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

//! HMAC-SHA256 request signing.
//!
//! The signing payload is the concatenation of:
//!
//! ```text
//! timestamp + METHOD + path + tail
//! ```
//!
//! where `tail` is the canonical query string (including its leading `?`,
//! empty when there are no parameters) for `GET`, and the serialized JSON body
//! (empty when there is none) for every other method. A non-`GET` request that
//! also carries a query string signs the body only; the service reconstructs
//! the payload the same way, so the two cases must not be unified.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::shared::HttpMethod;

type HmacSha256 = Hmac<Sha256>;

/// Current time as an ISO-8601 UTC timestamp with millisecond precision,
/// e.g. `2024-05-01T12:30:45.123Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the exact byte sequence that gets signed.
///
/// # Arguments
///
/// * `timestamp` - The value also sent in `OK-ACCESS-TIMESTAMP`
/// * `method` - Request method
/// * `path` - Request path without any query suffix
/// * `query_string` - Canonical query string as emitted by [`build_query`](crate::api::build_query)
/// * `body` - Serialized JSON body, or `""` when there is none
pub fn signing_payload(
    timestamp: &str,
    method: HttpMethod,
    path: &str,
    query_string: &str,
    body: &str,
) -> String {
    let tail = match method {
        HttpMethod::Get => query_string,
        HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => body,
    };
    format!("{}{}{}{}", timestamp, method.as_str(), path, tail)
}

/// Base64-encoded HMAC-SHA256 of `payload` keyed with `secret_key`.
pub fn sign(payload: &str, secret_key: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Build the signing payload for a request and sign it.
pub fn sign_request(
    timestamp: &str,
    method: HttpMethod,
    path: &str,
    query_string: &str,
    body: &str,
    secret_key: &str,
) -> String {
    sign(
        &signing_payload(timestamp, method, path, query_string, body),
        secret_key,
    )
}

//! Shared types and helpers used by the signer, the transport and the endpoint layer.

pub mod price;
pub mod types;

// Re-export commonly used items
pub use price::{parse_decimal, parse_timestamp_ms};
pub use types::*;

//! Request parameter and response payload types, one module per endpoint family.
//!
//! Response structs keep the service's decimal strings as `String` (see
//! [`parse_decimal`](crate::shared::parse_decimal)) and default any field the
//! service leaves out.

pub mod balance;
pub mod index;
pub mod market;
pub mod transaction;

pub use balance::*;
pub use index::*;
pub use market::*;
pub use transaction::*;

use serde::Serializer;

/// Serialize a chain list as the comma-separated string the service expects.
pub(crate) fn serialize_chains<S>(chains: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&crate::shared::join_chains(chains))
}

/// Serialize the risk-token filter flag: `"0"` filters risk tokens out,
/// `"1"` keeps them.
pub(crate) fn serialize_risk_filter<S>(
    exclude: &Option<bool>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match exclude {
        Some(true) => serializer.serialize_str("0"),
        Some(false) => serializer.serialize_str("1"),
        None => serializer.serialize_none(),
    }
}

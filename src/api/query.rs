//! Canonical query strings.
//!
//! The same string is appended to the request URL and fed into the signing
//! payload, so it has to be byte-identical for a given set of parameters:
//! keys are kept sorted (byte order) in a `BTreeMap`, absent values are
//! dropped, and pairs are form-urlencoded.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// Query parameters for a request, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Add a parameter only when `value` is present.
    pub fn with_opt<V: Display>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Add a parameter only when `key` is not already set.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params
            .entry(key.into())
            .or_insert_with(|| value.to_string());
        self
    }

    /// Build parameters from a serializable struct or map.
    ///
    /// Top-level fields become parameters. `null` fields are dropped, strings
    /// are taken verbatim, numbers and booleans use their JSON text. Nested
    /// arrays or objects are rejected; join list values before serializing.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Serialize(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(ApiError::Serialize(
                "query parameters must serialize to an object".to_string(),
            ));
        };

        let mut params = BTreeMap::new();
        for (key, field) in fields {
            let rendered = match field {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ApiError::Serialize(format!(
                        "query parameter `{}` is not a scalar",
                        key
                    )))
                }
            };
            params.insert(key, rendered);
        }
        Ok(Self { params })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render the canonical query string: `""` when empty, otherwise
    /// `?k1=v1&k2=v2` with keys in ascending order.
    pub fn to_query_string(&self) -> ApiResult<String> {
        if self.params.is_empty() {
            return Ok(String::new());
        }
        let encoded =
            serde_urlencoded::to_string(&self.params).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(format!("?{}", encoded))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(QueryParams::new(), |params, (k, v)| params.with(k, v))
    }
}

/// Canonical query string for optional parameters.
///
/// `None` and empty parameter sets both yield `""`.
pub fn build_query(params: Option<&QueryParams>) -> ApiResult<String> {
    match params {
        Some(params) => params.to_query_string(),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        let a: QueryParams = [("b", 2), ("a", 1)].into_iter().collect();
        let b: QueryParams = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(a.to_query_string().unwrap(), "?a=1&b=2");
        assert_eq!(a.to_query_string().unwrap(), b.to_query_string().unwrap());
    }

    #[test]
    fn test_byte_order_sorting() {
        let params = QueryParams::new()
            .with("limit", 100)
            .with("chainIndex", "1")
            .with("bar", "1m")
            .with("Zeta", "z");
        // Upper-case sorts before lower-case in byte order
        assert_eq!(
            params.to_query_string().unwrap(),
            "?Zeta=z&bar=1m&chainIndex=1&limit=100"
        );
    }

    #[test]
    fn test_absent_values_dropped() {
        let params = QueryParams::new().with("a", 1).with_opt("b", None::<u32>);
        assert_eq!(params.to_query_string().unwrap(), "?a=1");
    }

    #[test]
    fn test_empty_yields_empty_string() {
        assert_eq!(build_query(Some(&QueryParams::new())).unwrap(), "");
        assert_eq!(build_query(None).unwrap(), "");
    }

    #[test]
    fn test_values_are_encoded() {
        let params = QueryParams::new()
            .with("chains", "1,56")
            .with("search", "wrapped ether");
        assert_eq!(
            params.to_query_string().unwrap(),
            "?chains=1%2C56&search=wrapped+ether"
        );
    }

    #[test]
    fn test_with_default_keeps_existing() {
        let params = QueryParams::new()
            .with("limit", 20)
            .with_default("limit", 100)
            .with_default("bar", "1m");
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("bar"), Some("1m"));
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params {
            chain_index: String,
            limit: Option<u32>,
            after: Option<String>,
            exclude: bool,
        }

        let params = QueryParams::from_serialize(&Params {
            chain_index: "1".to_string(),
            limit: Some(5),
            after: None,
            exclude: true,
        })
        .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(
            params.to_query_string().unwrap(),
            "?chainIndex=1&exclude=true&limit=5"
        );
    }

    #[test]
    fn test_from_serialize_rejects_nested() {
        let value = serde_json::json!({ "chains": ["1", "56"] });
        assert!(matches!(
            QueryParams::from_serialize(&value),
            Err(ApiError::Serialize(_))
        ));
        assert!(QueryParams::from_serialize(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_repeatable() {
        let params = QueryParams::new().with("x", "1").with("a", "2");
        let first = params.to_query_string().unwrap();
        for _ in 0..10 {
            assert_eq!(params.to_query_string().unwrap(), first);
        }
    }
}

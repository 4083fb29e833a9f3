//! Response envelope decoding.
//!
//! Most endpoints wrap their payload as `{"code": "0", "msg": "", "data": ...}`.
//! A few return a bare JSON value. Decoding is an explicit two-way split:
//! a JSON object carrying a `code` field is an [`Decoded::Envelope`], anything
//! else is [`Decoded::Raw`] and is handed back unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// Success code carried by a successful envelope.
pub const SUCCESS_CODE: &str = "0";

/// The `{code, msg, data}` wrapper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// `"0"` on success. Non-string codes are kept as their JSON text.
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The payload on success, or [`ApiError::Okx`] carrying code and message.
    pub fn into_data(self) -> ApiResult<Value> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Okx {
                code: self.code,
                msg: self.msg,
            })
        }
    }
}

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// Object carrying a `code` field
    Envelope(ResponseEnvelope),
    /// Any other JSON value, returned as the payload itself
    Raw(Value),
}

impl Decoded {
    /// Classify a parsed JSON body.
    pub fn from_value(value: Value) -> ApiResult<Self> {
        Self::classify(value, None)
    }

    /// Parse and classify a response body.
    ///
    /// Decode errors carry `text` exactly as received.
    pub fn from_text(text: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| ApiError::decode(e, text))?;
        Self::classify(value, Some(text))
    }

    fn classify(value: Value, raw: Option<&str>) -> ApiResult<Self> {
        let is_envelope = matches!(&value, Value::Object(map) if map.contains_key("code"));
        if !is_envelope {
            return Ok(Decoded::Raw(value));
        }

        match ResponseEnvelope::deserialize(&value) {
            Ok(envelope) => Ok(Decoded::Envelope(envelope)),
            Err(e) => {
                let message = format!("malformed response envelope: {}", e);
                Err(match raw {
                    Some(raw) => ApiError::decode(message, raw),
                    None => ApiError::decode(message, &value.to_string()),
                })
            }
        }
    }

    /// Unwrap to the payload value.
    pub fn into_payload(self) -> ApiResult<Value> {
        match self {
            Decoded::Envelope(envelope) => envelope.into_data(),
            Decoded::Raw(value) => Ok(value),
        }
    }
}

/// Decode a 2xx response body into `T`.
///
/// Fails with [`ApiError::Decode`] when `text` is not JSON or the payload does
/// not match `T`, and with [`ApiError::Okx`] for an unsuccessful envelope.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let payload = Decoded::from_text(text)?.into_payload()?;
    serde_json::from_value(payload)
        .map_err(|e| ApiError::decode(format!("unexpected payload shape: {}", e), text))
}

/// Strings are taken as-is; any other JSON value (number, `null`, bool) is
/// rendered as its JSON text.
fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwrapped() {
        let data: Vec<i32> = decode_body(r#"{"code":"0","msg":"","data":[1,2,3]}"#).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_nonzero_code_fails() {
        let err = decode_body::<Value>(r#"{"code":"1","msg":"bad request","data":null}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "OKXError 1: bad request");
    }

    #[test]
    fn test_numeric_code_normalized() {
        let data: Value = decode_body(r#"{"code":0,"msg":"","data":{"a":1}}"#).unwrap();
        assert_eq!(data, json!({"a": 1}));

        let err = decode_body::<Value>(r#"{"code":50011,"msg":"Too Many Requests"}"#).unwrap_err();
        assert_eq!(err.okx_code(), Some("50011"));
    }

    #[test]
    fn test_raw_fallback_for_object_without_code() {
        let decoded = Decoded::from_value(json!({"price": "1.0"})).unwrap();
        assert_eq!(decoded, Decoded::Raw(json!({"price": "1.0"})));
        assert_eq!(decoded.into_payload().unwrap(), json!({"price": "1.0"}));
    }

    #[test]
    fn test_raw_fallback_for_array() {
        let data: Vec<String> = decode_body(r#"["a","b"]"#).unwrap();
        assert_eq!(data, vec!["a", "b"]);
    }

    #[test]
    fn test_envelope_missing_msg_and_data() {
        let decoded = Decoded::from_value(json!({"code": "0"})).unwrap();
        match decoded {
            Decoded::Envelope(env) => {
                assert!(env.is_success());
                assert_eq!(env.msg, "");
                assert_eq!(env.data, Value::Null);
            }
            Decoded::Raw(_) => panic!("expected envelope"),
        }
    }

    #[test]
    fn test_non_string_codes_surface_as_okx_errors() {
        let err = decode_body::<Value>(r#"{"code":null,"msg":"x","data":1}"#).unwrap_err();
        assert_eq!(err.okx_code(), Some("null"));

        let err = decode_body::<Value>(r#"{"code":1.5,"msg":"x"}"#).unwrap_err();
        assert_eq!(err.okx_code(), Some("1.5"));

        let err = decode_body::<Value>(r#"{"code":false,"msg":"x"}"#).unwrap_err();
        assert_eq!(err.to_string(), "OKXError false: x");
    }

    #[test]
    fn test_malformed_envelope_is_decode_error() {
        let err = Decoded::from_value(json!({"code": "0", "msg": 5})).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn test_malformed_envelope_keeps_raw_text() {
        let text = r#"{"msg":5,"code":"1","data":1}"#;
        let err = decode_body::<Value>(text).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.raw_body(), Some(text));
    }

    #[test]
    fn test_invalid_json_carries_raw_text() {
        let err = decode_body::<Value>("<html>oops</html>").unwrap_err();
        assert_eq!(err.raw_body(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_payload_type_mismatch() {
        let err = decode_body::<Vec<i32>>(r#"{"code":"0","msg":"","data":"nope"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}

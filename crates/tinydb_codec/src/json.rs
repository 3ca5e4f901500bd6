//! JSON snapshot encoding.

use crate::error::{CodecError, CodecResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes `value` as pretty-printed JSON (two-space indentation).
///
/// # Errors
///
/// Returns `EncodingFailed` if the value cannot be represented as JSON,
/// for example a map keyed by something other than strings.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> CodecResult<Vec<u8>> {
    serde_json::to_vec_pretty(value).map_err(|e| CodecError::encoding_failed(e.to_string()))
}

/// Decodes a complete JSON document from `bytes`.
///
/// Trailing content after the top-level value is rejected.
///
/// # Errors
///
/// Returns `DecodingFailed` for invalid UTF-8, malformed JSON, or JSON
/// that does not fit the shape of `T`. The message carries the line and
/// column of the failure.
pub fn from_json<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::decoding_failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use indexmap::IndexMap;

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let value = Value::object([("a", Value::from(1))]);
        let bytes = to_json_pretty(&value).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn key_order_is_preserved() {
        let value = Value::object([
            ("zebra", Value::from(1)),
            ("apple", Value::from(2)),
            ("mango", Value::from(3)),
        ]);
        let bytes = to_json_pretty(&value).unwrap();

        let decoded: IndexMap<String, Value> = from_json(&bytes).unwrap();
        let keys: Vec<&str> = decoded.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn floats_keep_their_exact_bits() {
        let floats = [
            1.071_566_039_146_582_6e-75,
            0.1,
            -2.225_073_858_507_201e-308,
            5e-324,
            1.797_693_134_862_315_7e308,
            -0.0,
            123_456.789_012_345_68,
        ];
        let value = Value::from(floats.to_vec());
        let decoded: Value = from_json(&to_json_pretty(&value).unwrap()).unwrap();

        let items = decoded.as_array().unwrap();
        for (original, item) in floats.iter().zip(items) {
            let Value::Float(f) = item else {
                panic!("expected a float, got {item:?}");
            };
            assert_eq!(f.to_bits(), original.to_bits(), "{original:e} came back as {f:e}");
        }
    }

    #[test]
    fn malformed_input_fails() {
        let result: CodecResult<Value> = from_json(b"{ not json");
        assert!(matches!(result, Err(CodecError::DecodingFailed { .. })));
    }

    #[test]
    fn empty_input_fails() {
        let result: CodecResult<Value> = from_json(b"");
        assert!(matches!(result, Err(CodecError::DecodingFailed { .. })));
    }

    #[test]
    fn trailing_content_fails() {
        let result: CodecResult<Value> = from_json(b"{} {}");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_utf8_fails() {
        let result: CodecResult<Value> = from_json(&[b'"', 0xff, 0xfe, b'"']);
        assert!(result.is_err());
    }

    #[test]
    fn shape_mismatch_fails() {
        let result: CodecResult<IndexMap<String, Vec<Value>>> = from_json(b"{\"users\": 5}");
        assert!(matches!(result, Err(CodecError::DecodingFailed { .. })));
    }
}

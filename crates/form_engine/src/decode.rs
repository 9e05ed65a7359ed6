use form_core::ApiResult;
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not valid json: {0}")]
    Malformed(String),
    #[error("response body is a json {found}, expected an object")]
    NotAnObject { found: &'static str },
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a response body into an [`ApiResult`]. A leading UTF-8 BOM is ignored.
pub fn decode_response(bytes: &[u8]) -> Result<ApiResult, DecodeError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed(err.to_string()))?;
    let found = kind_name(&value);
    ApiResult::from_value(value).ok_or(DecodeError::NotAnObject { found })
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_object_body() {
        let result = decode_response(br#"{"roll_number": "22BCS12225", "numbers": ["1"]}"#)
            .expect("object body");
        assert_eq!(result.roll_number(), Some("22BCS12225"));
        assert_eq!(result.list_field("numbers"), Some(vec!["1".to_string()]));
    }

    #[test]
    fn strips_utf8_bom() {
        let mut body = UTF8_BOM.to_vec();
        body.extend_from_slice(br#"{"alphabets": ["A"]}"#);
        assert!(decode_response(&body).is_ok());
    }

    #[test]
    fn rejects_non_object_json() {
        assert_eq!(
            decode_response(b"[1, 2]"),
            Err(DecodeError::NotAnObject { found: "array" })
        );
        assert_eq!(
            decode_response(b"\"ok\""),
            Err(DecodeError::NotAnObject { found: "string" })
        );
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(matches!(
            decode_response(b"<html>502 Bad Gateway</html>"),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(decode_response(b""), Err(DecodeError::Malformed(_))));
    }
}

//! Error types for payload decoding.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors produced while decoding an invocation payload.
///
/// Every variant means the whole invocation is rejected; a partially
/// populated request never escapes the codec.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The invocation did not start with the scheme prefix.
    #[error("invocation does not begin with the ghostprint scheme prefix")]
    MissingPrefix,
    /// The invocation did not end with the trailing delimiter.
    #[error("invocation does not end with the trailing delimiter")]
    MissingDelimiter,
    /// A percent escape was not followed by two hexadecimal digits.
    #[error("invalid percent-encoding in payload")]
    InvalidEscape {
        /// Byte offset of the offending escape within the encoded payload.
        position: usize,
    },
    /// The percent-decoded payload was not valid UTF-8.
    #[error("decoded payload is not valid utf-8")]
    InvalidUtf8 {
        /// Underlying conversion error.
        source: FromUtf8Error,
    },
    /// The decoded payload was not a JSON object of the expected shape.
    #[error("malformed payload structure")]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The `requestType` field was absent or not one of the recognized values.
    #[error("Invalid request type. Use \"post\" or \"get\".")]
    UnrecognizedRequestType {
        /// Value carried by the payload, when one was present.
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unrecognized_request_type_displays_the_operator_guidance() {
        let err = DecodeError::UnrecognizedRequestType {
            value: Some("put".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid request type. Use \"post\" or \"get\".");
    }

    #[test]
    fn structural_errors_preserve_their_sources() {
        let Err(json_error) = serde_json::from_str::<serde_json::Value>("nope") else {
            panic!("expected invalid json");
        };
        let err = DecodeError::Parse { source: json_error };
        assert!(err.source().is_some());

        let Err(utf8_error) = String::from_utf8(vec![0xC3, 0x28]) else {
            panic!("expected invalid utf-8");
        };
        let err = DecodeError::InvalidUtf8 { source: utf8_error };
        assert!(err.source().is_some());
    }
}

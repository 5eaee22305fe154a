//! Invocation payload decoding.
//!
//! # Design
//! - Framing first: the scheme prefix and the trailing delimiter are
//!   validated on the raw string before any decoding happens.
//! - Percent decoding is strict; malformed escapes are rejected instead of
//!   being passed through to the JSON parser.
//! - The wire shape is read into a raw serde struct and validated into
//!   [`PrintRequest`] in one step, so a partially populated request can
//!   never escape.

use serde::Deserialize;
use serde_json::Value;

use crate::error::DecodeError;

/// Scheme prefix expected at the start of every invocation string.
pub const SCHEME_PREFIX: &str = "ghostprint://payload=";

/// Delimiter appended after the encoded payload by the invoking browser.
pub const TRAILING_DELIMITER: char = '/';

/// A decoded, validated print request.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintRequest {
    /// Location of the document to retrieve.
    pub url: String,
    /// HTTP method used for the retrieval.
    pub method: RequestMethod,
    /// Optional request body, forwarded to the remote source.
    pub body: Option<Value>,
    /// Requested printer name; `None` selects the system default.
    pub printer_name: Option<String>,
}

/// Request method recognized by the payload contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
}

impl RequestMethod {
    /// Wire name of the method, lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            _ => None,
        }
    }
}

/// Wire shape of the percent-decoded payload. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    url: String,
    request_type: Option<String>,
    payload_body: Option<Value>,
    printer_name: Option<String>,
}

/// Decode a raw invocation string into a [`PrintRequest`].
///
/// The input must begin with [`SCHEME_PREFIX`], end with
/// [`TRAILING_DELIMITER`], and carry a percent-encoded JSON object between
/// the two.
///
/// # Errors
///
/// Returns [`DecodeError`] when the framing, the encoding, or the structure
/// of the payload is invalid, or when the request type is unrecognized.
pub fn decode(raw: &str) -> Result<PrintRequest, DecodeError> {
    let framed = raw
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    let encoded = framed
        .strip_suffix(TRAILING_DELIMITER)
        .ok_or(DecodeError::MissingDelimiter)?;
    validate_escapes(encoded)?;
    let decoded =
        urlencoding::decode(encoded).map_err(|source| DecodeError::InvalidUtf8 { source })?;
    let payload: RawPayload =
        serde_json::from_str(&decoded).map_err(|source| DecodeError::Parse { source })?;

    let Some(method) = payload.request_type.as_deref().and_then(RequestMethod::parse) else {
        return Err(DecodeError::UnrecognizedRequestType {
            value: payload.request_type,
        });
    };

    Ok(PrintRequest {
        url: payload.url,
        method,
        body: payload.payload_body,
        printer_name: payload.printer_name,
    })
}

/// Every `%` must introduce a two-digit hexadecimal escape. The decoder
/// itself passes malformed escapes through untouched, so they are rejected
/// here before decoding.
fn validate_escapes(encoded: &str) -> Result<(), DecodeError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let valid = bytes.get(index + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(index + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return Err(DecodeError::InvalidEscape { position: index });
            }
            index += 3;
        } else {
            index += 1;
        }
    }
    Ok(())
}

//! Secure random bytes with text encoding.

use data_encoding::{BASE64, HEXLOWER};
use serde::{Deserialize, Serialize};

use alea_core::{secure_random_bytes, RandomError};

/// Maximum bytes per request.
pub const MAX_BYTE_COUNT: usize = 1024;

/// Default byte count.
pub const DEFAULT_BYTE_COUNT: usize = 32;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Text encoding for generated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ByteEncoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard Base64 with padding.
    Base64,
}

/// Request for secure random bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomBytesRequest {
    /// Number of bytes (default: 32).
    pub length: Option<usize>,
    /// Text encoding of the result (default: hex).
    pub encoding: Option<ByteEncoding>,
}

/// Result returned by [`random_bytes`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomBytesResult {
    /// Number of raw bytes generated.
    pub length: usize,
    /// Encoding of `value`.
    pub encoding: ByteEncoding,
    /// The encoded bytes.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// Generate secure random bytes, returned in the requested text encoding.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if the byte count is zero or
/// above [`MAX_BYTE_COUNT`].
pub fn random_bytes(request: &RandomBytesRequest) -> Result<RandomBytesResult, RandomError> {
    let length = request.length.unwrap_or(DEFAULT_BYTE_COUNT);
    if length == 0 || length > MAX_BYTE_COUNT {
        return Err(RandomError::InvalidArgument(format!(
            "byte count must be between 1 and {MAX_BYTE_COUNT}, got {length}"
        )));
    }
    let bytes = secure_random_bytes(length);
    let encoding = request.encoding.unwrap_or_default();
    let value = match encoding {
        ByteEncoding::Hex => HEXLOWER.encode(&bytes),
        ByteEncoding::Base64 => BASE64.encode(&bytes),
    };
    Ok(RandomBytesResult {
        length,
        encoding,
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

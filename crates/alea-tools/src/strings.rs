//! Random string and UUID tools.

use serde::{Deserialize, Serialize};

use alea_core::{
    generate_random_string, secure_random_bytes, CharsetConfig, RandomError, DEFAULT_STRING_LENGTH,
};

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request for a charset-configured random string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomStringRequest {
    /// String length (default: 20).
    pub length: Option<usize>,
    /// Include uppercase letters (default: true).
    pub uppercase: Option<bool>,
    /// Include lowercase letters (default: true).
    pub lowercase: Option<bool>,
    /// Include digits (default: true).
    pub digits: Option<bool>,
    /// Include symbols (default: true).
    pub symbols: Option<bool>,
}

/// Result returned by [`random_string`].
///
/// `Debug` is manually implemented to mask the generated value — random
/// strings are frequently used as passwords, and must never end up in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomStringResult {
    /// The generated string.
    pub value: String,
}

impl std::fmt::Debug for RandomStringResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomStringResult")
            .field("value", &"***")
            .finish()
    }
}

/// Result returned by [`random_uuid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomUuidResult {
    /// Hyphenated lowercase version-4 UUID.
    pub uuid: String,
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// Generate a random string from the configured charsets.
///
/// Generated values are never logged.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] for out-of-range lengths or an
/// empty charset selection.
pub fn random_string(request: &RandomStringRequest) -> Result<RandomStringResult, RandomError> {
    let charsets = CharsetConfig {
        uppercase: request.uppercase.unwrap_or(true),
        lowercase: request.lowercase.unwrap_or(true),
        digits: request.digits.unwrap_or(true),
        symbols: request.symbols.unwrap_or(true),
    };
    let length = request.length.unwrap_or(DEFAULT_STRING_LENGTH);
    let value = generate_random_string(length, &charsets)?;
    Ok(RandomStringResult { value })
}

/// Generate a version-4 UUID from 16 bytes of the Secure Random Source.
///
/// The builder stamps the version and variant bits; the remaining 122 bits
/// are CSPRNG output.
#[must_use]
pub fn random_uuid() -> RandomUuidResult {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&secure_random_bytes(16));
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    RandomUuidResult {
        uuid: uuid.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

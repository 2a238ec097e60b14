//! Charset-configured random string generation.
//!
//! Backs the random-string tool: a pooled alphabet with one guaranteed
//! character per enabled set, then a Fisher-Yates shuffle to remove
//! positional bias. All draws use `OsRng`.

use rand::rngs::OsRng;
use rand::Rng;

use crate::error::RandomError;
use crate::random::secure_shuffle;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed string length.
pub const MIN_STRING_LENGTH: usize = 1;

/// Maximum allowed string length.
pub const MAX_STRING_LENGTH: usize = 256;

/// Default string length.
pub const DEFAULT_STRING_LENGTH: usize = 20;

// Character sets
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:',.<>?/~";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which character sets the pooled alphabet includes.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharsetConfig {
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (!@#$%^&*...).
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random string of the given `length` using the specified
/// charsets.
///
/// At least one character from each enabled charset is guaranteed. The
/// remaining positions are filled from the pooled alphabet, then the whole
/// string is shuffled so the guaranteed characters sit at random positions.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if:
/// - `length` is outside [`MIN_STRING_LENGTH`]..=[`MAX_STRING_LENGTH`]
/// - No charset is enabled
/// - `length` is less than the number of enabled charsets (can't guarantee
///   one from each)
///
/// # Panics
///
/// Panics if the generated bytes are not valid UTF-8 (should never happen
/// since all character sets are ASCII).
pub fn generate_random_string(
    length: usize,
    charsets: &CharsetConfig,
) -> Result<String, RandomError> {
    if !(MIN_STRING_LENGTH..=MAX_STRING_LENGTH).contains(&length) {
        return Err(RandomError::InvalidArgument(format!(
            "length must be between {MIN_STRING_LENGTH} and {MAX_STRING_LENGTH}, got {length}"
        )));
    }

    // Build the character pool and collect mandatory characters.
    let mut pool: Vec<u8> = Vec::new();
    let mut mandatory: Vec<u8> = Vec::new();
    let mut rng = OsRng;

    if charsets.uppercase {
        pool.extend_from_slice(UPPERCASE);
        mandatory.push(UPPERCASE[rng.gen_range(0..UPPERCASE.len())]);
    }
    if charsets.lowercase {
        pool.extend_from_slice(LOWERCASE);
        mandatory.push(LOWERCASE[rng.gen_range(0..LOWERCASE.len())]);
    }
    if charsets.digits {
        pool.extend_from_slice(DIGITS);
        mandatory.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    }
    if charsets.symbols {
        pool.extend_from_slice(SYMBOLS);
        mandatory.push(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]);
    }

    if pool.is_empty() {
        return Err(RandomError::InvalidArgument(
            "at least one charset must be enabled".to_string(),
        ));
    }

    if length < mandatory.len() {
        return Err(RandomError::InvalidArgument(format!(
            "length ({length}) must be at least {} to include one character from each enabled charset",
            mandatory.len()
        )));
    }

    // Fill the string: mandatory chars first, then random from the full pool.
    let mut chars: Vec<u8> = mandatory;
    for _ in chars.len()..length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Shuffle to eliminate positional bias.
    secure_shuffle(&mut chars);

    // Safety: all chars are ASCII.
    Ok(String::from_utf8(chars).expect("string chars are ASCII"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

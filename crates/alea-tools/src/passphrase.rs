//! Diceware passphrase tool.
//!
//! Stateless — the wordlist is read through the injected source on every
//! call, and generated values are never logged.

use serde::{Deserialize, Serialize};

use alea_core::{DicewarePassphrase, RandomError, WordlistId, WordlistSource, DEFAULT_WORD_COUNT};

/// Upper bound on requested words.
pub const MAX_WORD_COUNT: usize = 64;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request for a Diceware passphrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePassphraseRequest {
    /// Number of words (default: 5).
    pub word_count: Option<i64>,
    /// Canonical wordlist identifier
    /// (default: `short_wordlist_unique_prefixes.txt`).
    pub wordlist: Option<String>,
    /// Capitalize the first letter of each word (default: false).
    pub capitalize: Option<bool>,
}

/// Result returned by [`generate_passphrase`].
///
/// `Debug` is manually implemented to mask the generated material and
/// prevent accidental logging.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePassphraseResult {
    /// The generated passphrase, words joined by single spaces.
    pub passphrase: String,
    /// The raw dice rolls used, one per word, in draw order.
    pub rolls: Vec<String>,
}

impl std::fmt::Debug for GeneratePassphraseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratePassphraseResult")
            .field("passphrase", &"***")
            .field("rolls", &"***")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate a caller-supplied wordlist identifier into a [`WordlistId`].
fn parse_wordlist(identifier: &str) -> Result<WordlistId, RandomError> {
    WordlistId::from_identifier(identifier).ok_or_else(|| {
        RandomError::InvalidArgument(format!(
            "unknown wordlist: '{identifier}'. Expected one of: large_wordlist.txt, \
             original_reinhold_wordlist.txt, short_wordlist.txt, \
             short_wordlist_unique_prefixes.txt."
        ))
    })
}

// ---------------------------------------------------------------------------
// Tool
// ---------------------------------------------------------------------------

/// Generate a Diceware passphrase.
///
/// Defaults: 5 words, the 4-dice unique-prefix wordlist, no capitalization.
/// All parameter validation happens here, before a single die is rolled:
/// negative word counts, counts above [`MAX_WORD_COUNT`], and non-canonical
/// wordlist identifiers are rejected.
///
/// # Errors
///
/// - [`RandomError::InvalidArgument`] for out-of-range word counts or an
///   unknown wordlist identifier.
/// - [`RandomError::ResourceNotFound`] when the wordlist content cannot be
///   read through `source`.
/// - [`RandomError::WordNotFound`] when a roll misses the loaded wordlist
///   (corrupted or truncated list).
pub fn generate_passphrase(
    request: &GeneratePassphraseRequest,
    source: &dyn WordlistSource,
) -> Result<GeneratePassphraseResult, RandomError> {
    let word_count = match request.word_count {
        None => DEFAULT_WORD_COUNT,
        Some(n) => usize::try_from(n).map_err(|_| {
            RandomError::InvalidArgument(format!("word count must not be negative, got {n}"))
        })?,
    };
    if word_count > MAX_WORD_COUNT {
        return Err(RandomError::InvalidArgument(format!(
            "word count must be at most {MAX_WORD_COUNT}, got {word_count}"
        )));
    }

    let wordlist = match request.wordlist.as_deref() {
        Some(identifier) => parse_wordlist(identifier)?,
        None => WordlistId::ShortUniquePrefixes,
    };
    let capitalize = request.capitalize.unwrap_or(false);

    tracing::debug!(
        word_count,
        wordlist = wordlist.file_name(),
        dice = wordlist.dice_count(),
        capitalize,
        "generating passphrase"
    );

    let DicewarePassphrase { passphrase, rolls } =
        alea_core::generate_passphrase(word_count, wordlist.file_name(), capitalize, source)?;

    Ok(GeneratePassphraseResult { passphrase, rolls })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alea_core::InMemorySource;

    /// Full-coverage 4-dice list for the default wordlist identifier.
    fn default_source() -> InMemorySource {
        let mut raw = String::new();
        for a in '1'..='6' {
            for b in '1'..='6' {
                for c in '1'..='6' {
                    for d in '1'..='6' {
                        let key: String = [a, b, c, d].iter().collect();
                        raw.push_str(&key);
                        raw.push('\t');
                        raw.push('w');
                        raw.push_str(&key);
                        raw.push('\n');
                    }
                }
            }
        }
        InMemorySource::new().with(WordlistId::ShortUniquePrefixes.file_name(), raw)
    }

    #[test]
    fn defaults_to_five_words() {
        let request: GeneratePassphraseRequest = serde_json::from_str("{}").unwrap();
        let result = generate_passphrase(&request, &default_source()).unwrap();
        assert_eq!(result.passphrase.split(' ').count(), 5);
        assert_eq!(result.rolls.len(), 5);
    }

    #[test]
    fn word_count_request_field_is_camel_case() {
        let request: GeneratePassphraseRequest =
            serde_json::from_str(r#"{"wordCount": 3, "capitalize": true}"#).unwrap();
        let result = generate_passphrase(&request, &default_source()).unwrap();
        assert_eq!(result.rolls.len(), 3);
        for word in result.passphrase.split(' ') {
            assert!(word.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn negative_word_count_rejected() {
        let request = GeneratePassphraseRequest {
            word_count: Some(-1),
            wordlist: None,
            capitalize: None,
        };
        let err = generate_passphrase(&request, &default_source()).unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument(_)));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn oversized_word_count_rejected() {
        let request = GeneratePassphraseRequest {
            word_count: Some(i64::try_from(MAX_WORD_COUNT).unwrap() + 1),
            wordlist: None,
            capitalize: None,
        };
        assert!(generate_passphrase(&request, &default_source()).is_err());
    }

    #[test]
    fn unknown_wordlist_rejected_before_reading() {
        let request = GeneratePassphraseRequest {
            word_count: None,
            wordlist: Some("banana.txt".to_string()),
            capitalize: None,
        };
        // The source is empty: a non-canonical identifier must fail as
        // InvalidArgument, not ResourceNotFound.
        let err = generate_passphrase(&request, &InMemorySource::new()).unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument(_)));
        assert!(err.to_string().contains("unknown wordlist"));
    }

    #[test]
    fn missing_content_is_resource_not_found() {
        let request = GeneratePassphraseRequest {
            word_count: None,
            wordlist: Some(WordlistId::Short.file_name().to_string()),
            capitalize: None,
        };
        let err = generate_passphrase(&request, &InMemorySource::new()).unwrap_err();
        assert!(matches!(err, RandomError::ResourceNotFound(_)));
    }

    #[test]
    fn result_debug_masks_material() {
        let result = GeneratePassphraseResult {
            passphrase: "alpha beta".to_string(),
            rolls: vec!["1111".to_string()],
        };
        let rendered = format!("{result:?}");
        assert!(!rendered.contains("alpha"));
        assert!(!rendered.contains("1111"));
    }
}

//! Diceware wordlist parsing and lookup.
//!
//! A wordlist is line-oriented UTF-8 text, one `key<TAB>word` record per
//! line. Parsing is deliberately lenient: malformed individual lines
//! degrade the list silently instead of aborting the whole load, and no
//! count of discarded lines is reported.

use std::collections::BTreeMap;

use crate::error::RandomError;
use crate::source::WordlistSource;

/// An immutable mapping from fixed-width dice-roll keys to words.
///
/// Loaded fresh from source text per request and discarded afterwards —
/// nothing is cached or mutated across calls.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    entries: BTreeMap<String, String>,
}

impl Wordlist {
    /// Parse newline-delimited `key<TAB>word` records.
    ///
    /// Per-line policy, each rejection a plain continue-condition:
    /// - lines blank after trimming are skipped;
    /// - a line is kept only if splitting on `'\t'` yields exactly two
    ///   non-empty fields — more fields, fewer fields, or an empty field
    ///   discard the line without notice;
    /// - a repeated key overwrites the earlier entry.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut entries = BTreeMap::new();
        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let [key, word] = fields[..] else {
                continue;
            };
            if key.is_empty() || word.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), word.to_string());
        }
        Self { entries }
    }

    /// Read and parse the wordlist behind `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::ResourceNotFound`] when the source cannot
    /// resolve `identifier` to readable content. Never partial: a readable
    /// list always parses (malformed lines are dropped, not fatal).
    pub fn load(identifier: &str, source: &dyn WordlistSource) -> Result<Self, RandomError> {
        let raw = source
            .read(identifier)
            .map_err(|_| RandomError::ResourceNotFound(identifier.to_string()))?;
        Ok(Self::parse(&raw))
    }

    /// Look up the word for a dice roll.
    #[must_use]
    pub fn get(&self, roll: &str) -> Option<&str> {
        self.entries.get(roll).map(String::as_str)
    }

    /// Number of entries that survived parsing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no line survived parsing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the roll keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate the words in key order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Up to `max` words starting with `prefix`, in key order.
    ///
    /// On the unique-prefix wordlist a three-character prefix identifies at
    /// most one word; on the other lists several words may share a prefix.
    /// An empty prefix matches everything.
    #[must_use]
    pub fn suggest(&self, prefix: &str, max: usize) -> Vec<&str> {
        if prefix.is_empty() {
            return self.words().take(max).collect();
        }
        self.entries
            .values()
            .filter(|word| word.starts_with(prefix))
            .map(String::as_str)
            .take(max)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Diceware passphrase generation.
//!
//! Maps secure dice rolls to dictionary words: each word of the passphrase
//! comes from one fixed-width roll looked up in a tab-separated wordlist.
//! The wordlist is re-read and re-parsed through the injected source on
//! every call — nothing is cached between requests.

pub mod wordlist;

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::RandomError;
use crate::source::WordlistSource;
use self::wordlist::Wordlist;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Die faces; each roll character is one secure index draw into this set.
const FACES: [char; 6] = ['1', '2', '3', '4', '5', '6'];

/// Roll width used for wordlists absent from the registry.
pub const DEFAULT_DICE_COUNT: usize = 4;

/// Default number of words in a generated passphrase.
pub const DEFAULT_WORD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Wordlist registry
// ---------------------------------------------------------------------------

/// The canonical Diceware wordlists.
///
/// A compiled-in registry: each variant knows its identifier and the roll
/// width its keys use. Nothing here touches storage — content resolution
/// goes through [`WordlistSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordlistId {
    /// EFF large list — 7776 words, five dice per word.
    Large,
    /// Original Reinhold list — 7776 words, five dice per word.
    OriginalReinhold,
    /// EFF short list — 1296 words, four dice per word.
    Short,
    /// EFF short list with unique three-character prefixes — 1296 words,
    /// four dice per word.
    ShortUniquePrefixes,
}

impl WordlistId {
    /// Returns all canonical wordlists.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Large,
            Self::OriginalReinhold,
            Self::Short,
            Self::ShortUniquePrefixes,
        ]
    }

    /// The filename-like identifier the content source resolves.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Large => "large_wordlist.txt",
            Self::OriginalReinhold => "original_reinhold_wordlist.txt",
            Self::Short => "short_wordlist.txt",
            Self::ShortUniquePrefixes => "short_wordlist_unique_prefixes.txt",
        }
    }

    /// Number of dice rolled per word.
    #[must_use]
    pub const fn dice_count(self) -> usize {
        match self {
            Self::Large | Self::OriginalReinhold => 5,
            Self::Short | Self::ShortUniquePrefixes => 4,
        }
    }

    /// Number of words a well-formed list contains (`6^dice_count`).
    #[must_use]
    pub const fn word_count(self) -> usize {
        match self {
            Self::Large | Self::OriginalReinhold => 7776,
            Self::Short | Self::ShortUniquePrefixes => 1296,
        }
    }

    /// Resolve a canonical identifier; `None` for anything else.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|id| id.file_name() == identifier)
    }
}

/// Roll width for `identifier`.
///
/// The registered width for a canonical list, [`DEFAULT_DICE_COUNT`] for
/// anything else — unknown names and the empty string included. Pure and
/// total; no failure mode.
#[must_use]
pub fn dice_count_for(identifier: &str) -> usize {
    WordlistId::from_identifier(identifier).map_or(DEFAULT_DICE_COUNT, WordlistId::dice_count)
}

// ---------------------------------------------------------------------------
// Roll generation
// ---------------------------------------------------------------------------

/// Generate a string of exactly `n` dice-roll characters, concatenated in
/// draw order.
///
/// Every character is one secure uniform draw from `'1'..='6'`. `n == 0`
/// yields the empty string.
#[must_use]
pub fn generate_dice_rolls(n: usize) -> String {
    let mut rng = OsRng;
    (0..n).map(|_| FACES[rng.gen_range(0..FACES.len())]).collect()
}

// ---------------------------------------------------------------------------
// Passphrase assembly
// ---------------------------------------------------------------------------

/// A generated passphrase plus the raw rolls that selected its words.
///
/// `Debug` is manually implemented to mask both fields and prevent
/// accidental logging of secret material.
#[derive(Clone, Serialize, Deserialize)]
pub struct DicewarePassphrase {
    /// Space-joined words, in draw order.
    pub passphrase: String,
    /// One roll per word, in draw order — kept for display/audit only.
    pub rolls: Vec<String>,
}

impl std::fmt::Debug for DicewarePassphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DicewarePassphrase")
            .field("passphrase", &"***")
            .field("rolls", &"***")
            .finish()
    }
}

/// Generate a Diceware passphrase.
///
/// Loads the wordlist behind `identifier` through `source`, rolls
/// `word_count` keys of the width the registry assigns to `identifier`,
/// looks each roll up, and joins the words with single spaces in draw
/// order. With `capitalize`, each word's first character is uppercased and
/// the remainder left untouched.
///
/// # Errors
///
/// - [`RandomError::ResourceNotFound`] when `identifier` has no readable
///   content.
/// - [`RandomError::WordNotFound`] when a roll has no entry. The call
///   aborts immediately without a partial passphrase — no substitute,
///   retry, or skip.
pub fn generate_passphrase(
    word_count: usize,
    identifier: &str,
    capitalize: bool,
    source: &dyn WordlistSource,
) -> Result<DicewarePassphrase, RandomError> {
    let list = Wordlist::load(identifier, source)?;
    let width = dice_count_for(identifier);

    let mut words: Vec<String> = Vec::with_capacity(word_count);
    let mut rolls: Vec<String> = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let roll = generate_dice_rolls(width);
        let word = list.get(&roll).ok_or_else(|| RandomError::WordNotFound {
            roll: roll.clone(),
            wordlist: identifier.to_string(),
        })?;
        words.push(if capitalize {
            capitalize_first(word)
        } else {
            word.to_string()
        });
        rolls.push(roll);
    }

    let passphrase = words.join(" ");
    // The joined copy is what leaves this function; scrub the per-word
    // buffers before they drop.
    for word in &mut words {
        word.zeroize();
    }

    Ok(DicewarePassphrase { passphrase, rolls })
}

/// Uppercase the first character, leave the remainder unchanged.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().collect::<String>() + chars.as_str()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

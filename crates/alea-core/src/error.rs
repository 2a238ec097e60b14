//! Error types for `alea-core`.

use thiserror::Error;

/// Errors produced by randomness and passphrase operations.
///
/// Every failure is returned to the immediate caller as an explicit
/// `Result` — nothing is panicked across the boundary or logged and
/// swallowed internally.
#[derive(Debug, Error)]
pub enum RandomError {
    /// Malformed caller input — rejected before any generation begins.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A wordlist identifier did not resolve to readable content.
    #[error("wordlist not found: {0}")]
    ResourceNotFound(String),

    /// A generated roll has no entry in the loaded wordlist. The list is
    /// truncated or its key width disagrees with the registry — a
    /// well-formed list covers its whole key space, so this is never
    /// transient bad luck.
    #[error("no word for roll {roll} in wordlist {wordlist}")]
    WordNotFound {
        /// The dice roll that missed.
        roll: String,
        /// The wordlist identifier the roll was looked up in.
        wordlist: String,
    },
}

//! Wire-level error payloads.
//!
//! The surrounding dispatch layer owns the protocol; this module only
//! guarantees that every failure crosses the boundary with a
//! distinguishable kind and a human-readable message.

use serde::{Deserialize, Serialize};

use alea_core::RandomError;

/// Distinguishable failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Malformed caller input, rejected before any generation.
    InvalidArgument,
    /// A wordlist identifier with no readable content.
    ResourceNotFound,
    /// A roll with no wordlist entry — corrupted or mismatched wordlist.
    WordNotFound,
}

/// Serializable error representation handed to the dispatch layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Failure kind.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl From<&RandomError> for ErrorPayload {
    fn from(err: &RandomError) -> Self {
        let kind = match err {
            RandomError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RandomError::ResourceNotFound(_) => ErrorKind::ResourceNotFound,
            RandomError::WordNotFound { .. } => ErrorKind::WordNotFound,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<RandomError> for ErrorPayload {
    fn from(err: RandomError) -> Self {
        Self::from(&err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

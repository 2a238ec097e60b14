//! List shuffle and choice tools.
//!
//! Items are arbitrary JSON values — the boundary carries them through
//! without interpreting them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use alea_core::{secure_choice, secure_shuffle, RandomError};

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request to shuffle a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleListRequest {
    /// The items to permute.
    pub items: Vec<Value>,
}

/// Result returned by [`shuffle_list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleListResult {
    /// The same items in a securely shuffled order.
    pub items: Vec<Value>,
}

/// Request to choose one item from a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseFromListRequest {
    /// The candidates; must be non-empty.
    pub items: Vec<Value>,
}

/// Result returned by [`choose_from_list`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChooseFromListResult {
    /// The chosen item.
    pub item: Value,
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// Return the items in a securely shuffled order (in-place Fisher-Yates).
#[must_use]
pub fn shuffle_list(mut request: ShuffleListRequest) -> ShuffleListResult {
    secure_shuffle(&mut request.items);
    ShuffleListResult {
        items: request.items,
    }
}

/// Return one uniformly chosen item.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] when `items` is empty.
pub fn choose_from_list(
    request: &ChooseFromListRequest,
) -> Result<ChooseFromListResult, RandomError> {
    let item = secure_choice(&request.items)?.clone();
    Ok(ChooseFromListResult { item })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

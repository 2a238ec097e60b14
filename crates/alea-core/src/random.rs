//! Secure Random Source — uniform primitives over the OS CSPRNG.
//!
//! Everything random in ALEA draws from `OsRng`. Range sampling goes
//! through `rand`'s rejection-based uniform distribution, so no draw
//! carries modulo bias.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::error::RandomError;

/// Return a uniformly distributed integer over the closed interval
/// `[min, max]`, inclusive of both bounds.
///
/// `min == max` always returns that value.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if `min > max`.
pub fn secure_random_int(min: i64, max: i64) -> Result<i64, RandomError> {
    if min > max {
        return Err(RandomError::InvalidArgument(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }
    if min == max {
        return Ok(min);
    }
    let mut rng = OsRng;
    Ok(rng.gen_range(min..=max))
}

/// Return a uniformly distributed float over the half-open interval
/// `[min, max)`.
///
/// One secure 32-bit draw is scaled into `[0, 1)` and affine-mapped into
/// the requested interval. `min == max` returns `min`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if either bound is non-finite
/// or `min > max`.
pub fn secure_random_float(min: f64, max: f64) -> Result<f64, RandomError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::InvalidArgument(format!(
            "bounds must be finite, got [{min}, {max})"
        )));
    }
    if min > max {
        return Err(RandomError::InvalidArgument(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }
    let mut rng = OsRng;
    // 2^32 is exact in f64; the quotient lands in [0, 1).
    #[allow(clippy::arithmetic_side_effects)]
    let unit = f64::from(rng.next_u32()) / 4_294_967_296.0;
    #[allow(clippy::arithmetic_side_effects)]
    let value = unit.mul_add(max - min, min);
    Ok(value)
}

/// Fill and return `len` bytes from the OS CSPRNG.
#[must_use]
pub fn secure_random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Shuffle `items` in place — Fisher-Yates with a secure swap index per
/// position.
pub fn secure_shuffle<T>(items: &mut [T]) {
    items.shuffle(&mut OsRng);
}

/// Return a reference to one uniformly chosen element of `items`.
///
/// A single index draw over `0..items.len()`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if `items` is empty.
pub fn secure_choice<T>(items: &[T]) -> Result<&T, RandomError> {
    if items.is_empty() {
        return Err(RandomError::InvalidArgument(
            "cannot choose from an empty list".to_string(),
        ));
    }
    let mut rng = OsRng;
    Ok(&items[rng.gen_range(0..items.len())])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Bounded random number tools.

use serde::{Deserialize, Serialize};

use alea_core::{secure_random_float, secure_random_int, RandomError};

/// Default lower bound for [`random_float`].
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;

/// Default upper bound for [`random_float`].
pub const DEFAULT_FLOAT_MAX: f64 = 1.0;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request for one uniform integer over `[min, max]`, bounds inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomIntegerRequest {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

/// Result returned by [`random_integer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomIntegerResult {
    /// The drawn value.
    pub value: i64,
}

/// Request for one uniform float over `[min, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomFloatRequest {
    /// Lower bound, included (default: 0.0).
    pub min: Option<f64>,
    /// Upper bound, excluded (default: 1.0).
    pub max: Option<f64>,
}

/// Result returned by [`random_float`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomFloatResult {
    /// The drawn value.
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// Draw one uniform integer.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if `min > max`.
pub fn random_integer(request: &RandomIntegerRequest) -> Result<RandomIntegerResult, RandomError> {
    let value = secure_random_int(request.min, request.max)?;
    Ok(RandomIntegerResult { value })
}

/// Draw one uniform float; defaults to the unit interval `[0, 1)`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidArgument`] if `min > max` or either bound
/// is non-finite.
pub fn random_float(request: &RandomFloatRequest) -> Result<RandomFloatResult, RandomError> {
    let min = request.min.unwrap_or(DEFAULT_FLOAT_MIN);
    let max = request.max.unwrap_or(DEFAULT_FLOAT_MAX);
    let value = secure_random_float(min, max)?;
    Ok(RandomFloatResult { value })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_within_bounds() {
        let request = RandomIntegerRequest { min: 1, max: 100 };
        for _ in 0..50 {
            let result = random_integer(&request).unwrap();
            assert!((1..=100).contains(&result.value));
        }
    }

    #[test]
    fn integer_inverted_bounds_rejected() {
        let request = RandomIntegerRequest { min: 10, max: 1 };
        assert!(random_integer(&request).is_err());
    }

    #[test]
    fn float_defaults_to_unit_interval() {
        let request = RandomFloatRequest {
            min: None,
            max: None,
        };
        for _ in 0..50 {
            let result = random_float(&request).unwrap();
            assert!(result.value >= 0.0 && result.value < 1.0);
        }
    }

    #[test]
    fn float_custom_bounds() {
        let request = RandomFloatRequest {
            min: Some(-4.0),
            max: Some(4.0),
        };
        let result = random_float(&request).unwrap();
        assert!(result.value >= -4.0 && result.value < 4.0);
    }

    #[test]
    fn requests_deserialize_with_missing_fields() {
        let request: RandomFloatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.min.is_none());
        assert!(request.max.is_none());

        let request: RandomIntegerRequest =
            serde_json::from_str(r#"{"min": -5, "max": 5}"#).unwrap();
        assert_eq!(request.min, -5);
        assert_eq!(request.max, 5);
    }
}

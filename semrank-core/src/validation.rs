//! Parameter checks shared by every operation. All of them run before the
//! first corpus scan.

use crate::errors::{SemrankError, SemrankResult};

/// Limits, k values, block sizes and head counts must be at least 1.
pub fn require_positive(name: &'static str, value: usize) -> SemrankResult<()> {
    if value == 0 {
        return Err(SemrankError::invalid(name, "must be greater than zero"));
    }
    Ok(())
}

/// Temperatures and decay constants must be finite and strictly positive.
pub fn require_positive_f64(name: &'static str, value: f64) -> SemrankResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SemrankError::invalid(
            name,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Weights must be finite and not negative.
pub fn require_non_negative(name: &'static str, value: f64) -> SemrankResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SemrankError::invalid(
            name,
            format!("must be a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Lambda and time weights live in [0, 1].
pub fn require_unit_interval(name: &'static str, value: f64) -> SemrankResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SemrankError::invalid(
            name,
            format!("must be within [0, 1], got {value}"),
        ));
    }
    Ok(())
}

/// Thresholds compared against similarities must be finite numbers.
pub fn require_finite(name: &'static str, value: f64) -> SemrankResult<()> {
    if !value.is_finite() {
        return Err(SemrankError::invalid(
            name,
            format!("must be a finite number, got {value}"),
        ));
    }
    Ok(())
}

/// A vector must match the corpus dimension.
pub fn require_dimensions(expected: usize, actual: usize) -> SemrankResult<()> {
    if expected != actual {
        return Err(SemrankError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_rejected() {
        let err = require_positive("limit", 0).unwrap_err();
        assert!(matches!(
            err,
            SemrankError::InvalidParameter { name: "limit", .. }
        ));
        assert!(require_positive("limit", 1).is_ok());
    }

    #[test]
    fn temperature_must_be_positive_and_finite() {
        assert!(require_positive_f64("temperature", 0.0).is_err());
        assert!(require_positive_f64("temperature", -1.0).is_err());
        assert!(require_positive_f64("temperature", f64::NAN).is_err());
        assert!(require_positive_f64("temperature", f64::INFINITY).is_err());
        assert!(require_positive_f64("temperature", 0.5).is_ok());
    }

    #[test]
    fn unit_interval_bounds_are_inclusive() {
        assert!(require_unit_interval("lambda", 0.0).is_ok());
        assert!(require_unit_interval("lambda", 1.0).is_ok());
        assert!(require_unit_interval("lambda", 1.01).is_err());
        assert!(require_unit_interval("lambda", -0.01).is_err());
        assert!(require_unit_interval("lambda", f64::NAN).is_err());
    }

    #[test]
    fn thresholds_reject_nan_and_infinities() {
        assert!(require_finite("min_similarity", f64::NAN).is_err());
        assert!(require_finite("min_similarity", f64::INFINITY).is_err());
        assert!(require_finite("min_similarity", f64::NEG_INFINITY).is_err());
        assert!(require_finite("min_similarity", -1.0).is_ok());
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(require_non_negative("vector_weight", -0.1).is_err());
        assert!(require_non_negative("vector_weight", 0.0).is_ok());
    }

    #[test]
    fn dimension_mismatch_carries_both_sizes() {
        let err = require_dimensions(384, 3).unwrap_err();
        assert!(matches!(
            err,
            SemrankError::DimensionMismatch {
                expected: 384,
                actual: 3
            }
        ));
    }
}

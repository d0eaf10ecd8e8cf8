//! Error type for everything that can be rejected at a call boundary.
//!
//! All checks run before any buffer is allocated or written,
//! so a failed call never leaves partial state behind.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("signal has {len} samples, at least {min} are required")]
    SignalTooShort { len: usize, min: usize },

    #[error("step count must be non-negative, got {0}")]
    NegativeSteps(i64),

    #[error("time domain must be finite, non-negative and ordered, found {0}")]
    InvalidTimeDomain(f64),

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("buffer length mismatch, expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("stencil reaches {reach} points out, only nearest neighbours are supported")]
    StencilReach { reach: usize },

    #[error("at least one timing trial is required")]
    NoTrials,
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;

pub fn check_len(len: usize, min: usize) -> Result<()> {
    if len < min {
        return Err(InvalidInputError::SignalTooShort { len, min });
    }
    Ok(())
}

pub fn check_same_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(InvalidInputError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Step counts arriving from outside (command line, other callers)
/// may be signed.
pub fn checked_steps(steps: i64) -> Result<usize> {
    usize::try_from(steps).map_err(|_| InvalidInputError::NegativeSteps(steps))
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn len_checks() {
        assert!(check_len(3, 3).is_ok());
        assert_eq!(
            check_len(2, 3),
            Err(InvalidInputError::SignalTooShort { len: 2, min: 3 })
        );
        assert!(check_same_len(4, 4).is_ok());
        assert_eq!(
            check_same_len(4, 5),
            Err(InvalidInputError::LengthMismatch {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn signed_steps() {
        assert_eq!(checked_steps(0), Ok(0));
        assert_eq!(checked_steps(1024), Ok(1024));
        assert_eq!(checked_steps(-1), Err(InvalidInputError::NegativeSteps(-1)));
    }

    #[test]
    fn messages() {
        let e = InvalidInputError::SignalTooShort { len: 2, min: 3 };
        assert_eq!(e.to_string(), "signal has 2 samples, at least 3 are required");
        assert_eq!(
            InvalidInputError::NegativeSteps(-4).to_string(),
            "step count must be non-negative, got -4"
        );
    }
}

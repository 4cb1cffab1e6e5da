//! RNG helpers: bounded random integers and uniform item picks.

use std::fmt;

use rand::{thread_rng, Rng};

/// Error type for the RNG helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// Argument has the wrong shape (e.g. a non-finite float).
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    /// Argument has the right type but an out-of-bounds value.
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { field, expected } => {
                write!(f, "`{field}` must be {expected}")
            }
            Self::OutOfRange { field, constraint } => {
                write!(f, "`{field}` must be {constraint}")
            }
        }
    }
}

impl std::error::Error for RandomError {}

/// Uniform random integer between `ceil(min)` and `floor(max)`, inclusive.
///
/// # Errors
///
/// Returns an error when either bound is non-finite, or when the adjusted
/// bounds leave no integer in range.
pub fn random_int(min: f64, max: f64) -> Result<i64, RandomError> {
    if !min.is_finite() {
        return Err(RandomError::InvalidType {
            field: "min",
            expected: "a finite number",
        });
    }
    if !max.is_finite() {
        return Err(RandomError::InvalidType {
            field: "max",
            expected: "a finite number",
        });
    }

    #[expect(clippy::cast_possible_truncation, reason = "bounds are finite and pre-rounded")]
    let low = min.ceil() as i64;
    #[expect(clippy::cast_possible_truncation, reason = "bounds are finite and pre-rounded")]
    let high = max.floor() as i64;
    if low > high {
        return Err(RandomError::OutOfRange {
            field: "min",
            constraint: "less than or equal to `max`",
        });
    }

    Ok(thread_rng().gen_range(low..=high))
}

/// Uniform random pick from a slice, or `None` when it is empty.
#[must_use]
pub fn random_item<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = thread_rng().gen_range(0..items.len());
    Some(&items[index])
}

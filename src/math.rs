//! Integer math helpers: factorial, gcd/lcm over slices, and binomials.

use std::fmt;

/// Error type for the math helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
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
    /// Fewer inputs than the operation needs.
    TooFewArguments {
        field: &'static str,
        minimum: usize,
    },
    /// Intermediate result does not fit the result type.
    Overflow { operation: &'static str },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { field, expected } => {
                write!(f, "`{field}` must be {expected}")
            }
            Self::OutOfRange { field, constraint } => {
                write!(f, "`{field}` must be {constraint}")
            }
            Self::TooFewArguments { field, minimum } => {
                write!(f, "`{field}` needs at least {minimum} values")
            }
            Self::Overflow { operation } => {
                write!(f, "{operation} overflowed")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// `n!` with checked arithmetic.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] when the product exceeds `u128`
/// (first at `n = 35`).
pub fn factorial(n: u64) -> Result<u128, MathError> {
    let mut product: u128 = 1;
    for i in 2..=u128::from(n) {
        product = product
            .checked_mul(i)
            .ok_or(MathError::Overflow { operation: "factorial" })?;
    }
    Ok(product)
}

fn gcd_pair(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Greatest common divisor of two or more integers.
///
/// Negative inputs contribute their absolute value; the gcd of all zeros
/// is 0.
///
/// # Errors
///
/// Returns [`MathError::TooFewArguments`] when `nums` has fewer than two
/// elements.
pub fn gcd(nums: &[i64]) -> Result<u64, MathError> {
    if nums.len() < 2 {
        return Err(MathError::TooFewArguments {
            field: "nums",
            minimum: 2,
        });
    }

    Ok(nums
        .iter()
        .map(|n| n.unsigned_abs())
        .fold(0, gcd_pair))
}

/// Least common multiple of two or more integers.
///
/// Negative inputs contribute their absolute value; an lcm involving zero
/// is 0.
///
/// # Errors
///
/// Returns [`MathError::TooFewArguments`] when `nums` has fewer than two
/// elements, or [`MathError::Overflow`] when the result exceeds `u64`.
pub fn lcm(nums: &[i64]) -> Result<u64, MathError> {
    if nums.len() < 2 {
        return Err(MathError::TooFewArguments {
            field: "nums",
            minimum: 2,
        });
    }

    let mut acc: u64 = nums[0].unsigned_abs();
    for n in &nums[1..] {
        let n = n.unsigned_abs();
        if acc == 0 || n == 0 {
            acc = 0;
            continue;
        }
        acc = (acc / gcd_pair(acc, n))
            .checked_mul(n)
            .ok_or(MathError::Overflow { operation: "lcm" })?;
    }
    Ok(acc)
}

/// `n` choose `k`, via the multiplicative formula.
///
/// # Errors
///
/// Returns [`MathError::OutOfRange`] when `k > n`, or
/// [`MathError::Overflow`] when the result exceeds `u128`.
pub fn binomial_coefficient(n: u64, k: u64) -> Result<u128, MathError> {
    if k > n {
        return Err(MathError::OutOfRange {
            field: "k",
            constraint: "less than or equal to `n`",
        });
    }

    // C(n, k) == C(n, n - k); the smaller index needs fewer steps.
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=u128::from(k) {
        // Multiply before dividing so each intermediate stays integral.
        result = result
            .checked_mul(u128::from(n) - u128::from(k) + i)
            .ok_or(MathError::Overflow {
                operation: "binomial coefficient",
            })?
            / i;
    }
    Ok(result)
}

/// Probability of exactly `successes` successes in `trials` independent
/// trials, each succeeding with probability `p`.
///
/// # Errors
///
/// Returns an error when `p` is non-finite or outside `[0, 1]`, when
/// `successes > trials`, or when the underlying coefficient overflows.
pub fn binomial_probability(successes: u64, trials: u64, p: f64) -> Result<f64, MathError> {
    if !p.is_finite() {
        return Err(MathError::InvalidType {
            field: "p",
            expected: "a finite number",
        });
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::OutOfRange {
            field: "p",
            constraint: "between 0 and 1, inclusive",
        });
    }
    if successes > trials {
        return Err(MathError::OutOfRange {
            field: "successes",
            constraint: "less than or equal to `trials`",
        });
    }

    #[expect(clippy::cast_precision_loss, reason = "probabilities tolerate f64 rounding")]
    let coefficient = binomial_coefficient(trials, successes)? as f64;
    #[expect(clippy::cast_precision_loss, reason = "exponents are small integers")]
    let probability = coefficient
        * p.powf(successes as f64)
        * (1.0 - p).powf((trials - successes) as f64);
    Ok(probability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(factorial(34).is_ok());
        assert_eq!(
            factorial(35),
            Err(MathError::Overflow { operation: "factorial" })
        );
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&[12, 18]).unwrap(), 6);
        assert_eq!(gcd(&[12, 18, 24]).unwrap(), 6);
        assert_eq!(gcd(&[-12, 18]).unwrap(), 6);
        assert_eq!(gcd(&[0, 0]).unwrap(), 0);
        assert_eq!(gcd(&[0, 5]).unwrap(), 5);
        assert_eq!(gcd(&[17, 13]).unwrap(), 1);
    }

    #[test]
    fn test_gcd_needs_two_values() {
        assert!(matches!(
            gcd(&[12]),
            Err(MathError::TooFewArguments { minimum: 2, .. })
        ));
        assert!(gcd(&[]).is_err());
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(&[4, 6]).unwrap(), 12);
        assert_eq!(lcm(&[2, 3, 4]).unwrap(), 12);
        assert_eq!(lcm(&[-4, 6]).unwrap(), 12);
        assert_eq!(lcm(&[0, 6]).unwrap(), 0);
    }

    #[test]
    fn test_lcm_overflow() {
        let primes = [4_294_967_311_i64, 4_294_967_357];
        assert_eq!(
            lcm(&primes),
            Err(MathError::Overflow { operation: "lcm" })
        );
    }

    #[test]
    fn test_binomial_coefficient() {
        assert_eq!(binomial_coefficient(5, 2).unwrap(), 10);
        assert_eq!(binomial_coefficient(10, 0).unwrap(), 1);
        assert_eq!(binomial_coefficient(10, 10).unwrap(), 1);
        assert_eq!(binomial_coefficient(52, 5).unwrap(), 2_598_960);
    }

    #[test]
    fn test_binomial_coefficient_rejects_k_above_n() {
        assert!(matches!(
            binomial_coefficient(5, 6),
            Err(MathError::OutOfRange { field: "k", .. })
        ));
    }

    #[test]
    fn test_binomial_probability() {
        // Fair coin, exactly 5 heads in 10 flips.
        let p = binomial_probability(5, 10, 0.5).unwrap();
        assert!((p - 0.246_093_75).abs() < 1e-12);

        assert_eq!(binomial_probability(0, 10, 0.0).unwrap(), 1.0);
        assert_eq!(binomial_probability(10, 10, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_binomial_probability_validation() {
        assert!(matches!(
            binomial_probability(1, 2, f64::NAN),
            Err(MathError::InvalidType { field: "p", .. })
        ));
        assert!(matches!(
            binomial_probability(1, 2, 1.5),
            Err(MathError::OutOfRange { field: "p", .. })
        ));
        assert!(matches!(
            binomial_probability(3, 2, 0.5),
            Err(MathError::OutOfRange { field: "successes", .. })
        ));
    }
}

//! Checked integer division

use crate::exceptions::Failure;
use crate::outcome::{Outcome, Phase};
use log::trace;

/// Truncating division of `dividend` by `divisor`.
///
/// Both failure cases are caller-preventable and are detected before any
/// arithmetic happens.
///
/// # Example
///
/// ```
/// use fallible::{Classification, divide};
///
/// assert_eq!(divide(-7, 2).unwrap(), -3);
/// assert_eq!(
///     divide(1, 0).unwrap_err().classification(),
///     Classification::DivideByZero
/// );
/// ```
pub fn divide(dividend: i64, divisor: i64) -> Outcome<i64> {
    trace!("divide({dividend}, {divisor}): {} -> {}", Phase::Init, Phase::Validating);

    let outcome = if divisor == 0 {
        Err(Failure::DivideByZero)
    } else {
        dividend
            .checked_div(divisor)
            .ok_or(Failure::Overflow { dividend, divisor })
    };

    trace!(
        "divide({dividend}, {divisor}): {} -> {}",
        Phase::Validating,
        Phase::of(&outcome)
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Classification;

    #[test]
    fn test_zero_divisor_fails() {
        for dividend in [0, 1, -1, 10, i64::MAX, i64::MIN] {
            let failure = divide(dividend, 0).unwrap_err();
            assert_eq!(failure.classification(), Classification::DivideByZero);
        }
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(divide(10, 2).unwrap(), 5);
        assert_eq!(divide(7, 2).unwrap(), 3);
        assert_eq!(divide(-7, 2).unwrap(), -3);
        assert_eq!(divide(7, -2).unwrap(), -3);
        assert_eq!(divide(-7, -2).unwrap(), 3);
        assert_eq!(divide(0, 5).unwrap(), 0);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(divide(i64::MAX, 1).unwrap(), i64::MAX);
        assert_eq!(divide(i64::MIN, 1).unwrap(), i64::MIN);
        assert_eq!(divide(i64::MAX, -1).unwrap(), -i64::MAX);
    }

    #[test]
    fn test_last_error_untouched() {
        use crate::diagnostics::errno;

        errno::set_last_error(42);
        assert!(divide(1, 0).is_err());
        assert_eq!(errno::last_error(), 42);
        assert_eq!(divide(10, 2).unwrap(), 5);
        assert_eq!(errno::last_error(), 42);
    }

    #[test]
    fn test_overflow_is_classified() {
        let failure = divide(i64::MIN, -1).unwrap_err();
        assert_eq!(failure.classification(), Classification::Overflow);
        assert!(failure.classification().is_caller_preventable());
    }
}

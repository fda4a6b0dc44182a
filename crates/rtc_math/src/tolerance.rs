//! Approximate comparison of floating point values.

/// Largest absolute difference at which two values are still considered
/// equal.
pub const EPSILON: f64 = 0.00005;

/// Whether `a` and `b` differ by at most [`EPSILON`].
#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    approximately_equal_within(a, b, EPSILON)
}

/// Whether `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn approximately_equal_within(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_with_rounding_error_is_approximately_equal_to_exact_value() {
        assert!(approximately_equal(0.1 * 0.2, 0.02));
    }

    #[test]
    fn difference_exactly_at_epsilon_counts_as_equal() {
        assert!(approximately_equal_within(1.0, 1.5, 0.5));
        assert!(approximately_equal(0.0, EPSILON));
    }

    #[test]
    fn difference_above_epsilon_is_not_equal() {
        assert!(!approximately_equal(1.0, 1.0001));
        assert!(!approximately_equal_within(1.0, 1.5, 0.25));
    }

    #[test]
    fn comparison_is_symmetric() {
        assert_eq!(
            approximately_equal(3.0, 3.00004),
            approximately_equal(3.00004, 3.0)
        );
    }

    #[test]
    fn nan_is_never_approximately_equal() {
        assert!(!approximately_equal(f64::NAN, f64::NAN));
        assert!(!approximately_equal(f64::NAN, 0.0));
    }
}

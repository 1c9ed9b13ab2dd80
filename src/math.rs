#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Evaluates a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result.mul_add(x, coeff);
    }
    result
}

/// Floored modulo: the result takes the sign of the divisor.
///
/// Unlike Rust's `%` operator which can return negative values, the result
/// always lies in the range [0, m).
///
/// # Arguments
///
/// * `x` - The dividend
/// * `m` - The modulus (must be positive)
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Sign of `x` as -1, 0 or 1.
///
/// Unlike [`f64::signum`], zero maps to zero.
pub(crate) fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Quadratic interpolation through three equally spaced samples.
///
/// `f0`, `f1` and `f2` are sampled at p = 0, 0.5 and 1; the result is the value
/// of the fitted parabola at `p`.
pub(crate) fn interpolate(f0: f64, f1: f64, f2: f64, p: f64) -> f64 {
    let a = f1 - f0;
    let b = f2 - f1 - a;
    f0 + p * (2.0 * a + b * (2.0 * p - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floored_mod_is_never_negative() {
        assert_eq!(floored_mod(-30.0, 1440.0), 1410.0);
        assert_eq!(floored_mod(1450.0, 1440.0), 10.0);
        assert_eq!(floored_mod(0.0, 360.0), 0.0);
    }

    #[test]
    fn interpolate_hits_the_samples() {
        let (f0, f1, f2) = (1.0, 4.0, 2.5);
        assert!((interpolate(f0, f1, f2, 0.0) - f0).abs() < 1e-12);
        assert!((interpolate(f0, f1, f2, 0.5) - f1).abs() < 1e-12);
        assert!((interpolate(f0, f1, f2, 1.0) - f2).abs() < 1e-12);
    }

    #[test]
    fn polynomial_matches_direct_evaluation() {
        let x = 0.37;
        let direct = 2.0 - 3.0 * x + 0.5 * x * x;
        assert!((polynomial(&[2.0, -3.0, 0.5], x) - direct).abs() < 1e-12);
        assert_eq!(polynomial(&[], x), 0.0);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
        assert_eq!(sign(-1e-300), -1);
        assert_eq!(sign(3.0), 1);
    }
}

//! Standard-normal helpers
//!
//! Small, allocation-free Gaussian building blocks. The return process uses
//! Φ and φ for its truncation-centering correction; the statistical tests
//! use the variance helper to check process moments.

use std::f64::consts::TAU;

/// Standard normal probability density φ(x)
///
/// # Examples
///
/// ```
/// use tradesim::probability::standard_normal_pdf;
///
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-12);
/// ```
#[inline(always)]
pub fn standard_normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / TAU.sqrt()
}

/// Standard normal cumulative distribution Φ(x)
///
/// Evaluated through the error function, `Φ(x) = (1 + erf(x/√2)) / 2`.
///
/// # Examples
///
/// ```
/// use tradesim::probability::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// ```
#[inline]
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function approximation (Abramowitz and Stegun 7.1.26)
///
/// Maximum absolute error 1.5e-7, accurate enough for the centering
/// correction and every test tolerance in this crate.
#[inline]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;

    sign * (1.0 - poly * (-x * x).exp())
}

/// Sample variance from running sums, `Var(X) = E[X²] − E[X]²`
///
/// # Examples
///
/// ```
/// use tradesim::probability::variance_from_sums;
///
/// // [2, 4, 6] has population variance 8/3
/// let variance = variance_from_sums(12.0, 56.0, 3.0);
/// assert!((variance - 8.0 / 3.0).abs() < 1e-12);
/// ```
#[inline(always)]
pub fn variance_from_sums(sum: f64, sum_sq: f64, n: f64) -> f64 {
    debug_assert!(n > 0.0, "Count must be positive");

    let mean = sum / n;
    // Clamp to absorb cancellation error on near-constant data
    (sum_sq / n - mean * mean).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_values_and_symmetry() {
        assert!((standard_normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);

        for x in [0.3, 1.0, 2.7] {
            assert!((standard_normal_pdf(x) - standard_normal_pdf(-x)).abs() < 1e-15);
        }

        // Far tails vanish
        assert!(standard_normal_pdf(40.0) < 1e-300);
    }

    #[test]
    fn test_cdf_reference_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((standard_normal_cdf(1.0) - 0.8413447460685429).abs() < 1e-6);
        assert!((standard_normal_cdf(-2.0) - 0.022750131948179195).abs() < 1e-6);

        // Complement symmetry
        for x in [0.25, 0.8, 1.9] {
            let total = standard_normal_cdf(x) + standard_normal_cdf(-x);
            assert!((total - 1.0).abs() < 1e-7);
        }

        // Monotone over a coarse grid
        let mut previous = standard_normal_cdf(-6.0);
        for i in -59..=60 {
            let current = standard_normal_cdf(i as f64 / 10.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_erf_is_odd_and_saturates() {
        assert!(erf(0.0).abs() < 1e-12);
        assert!((erf(0.7) + erf(-0.7)).abs() < 1e-12);
        assert!((erf(6.0) - 1.0).abs() < 1e-7);
        assert!((erf(-6.0) + 1.0).abs() < 1e-7);
    }

    #[test]
    fn test_variance_from_sums() {
        let data = [1.5, 2.5, 3.5, 4.5];
        let sum: f64 = data.iter().sum();
        let sum_sq: f64 = data.iter().map(|x| x * x).sum();
        let variance = variance_from_sums(sum, sum_sq, data.len() as f64);
        assert!((variance - 1.25).abs() < 1e-12);

        // Constant data: exactly zero after the clamp
        assert_eq!(variance_from_sums(21.0, 63.0, 7.0), 0.0);
    }
}

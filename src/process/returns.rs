//! Truncated, centered log-returns
//!
//! One-period logarithmic returns scaled by stochastic volatility. The raw
//! draw `s·ε` is capped from above at M, which skews its mean negative; the
//! exact conditional mean of the capped draw,
//!
//! E[min(s·ε, M) | s] = M·(1 − Φ(M/s)) − s·φ(M/s),
//!
//! is subtracted back out so every output has zero conditional mean while
//! staying bounded above. The cap is one-sided on purpose: downside moves
//! are left untouched.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::probability::{standard_normal_cdf, standard_normal_pdf};

/// Unbounded sequence of capped, mean-centered returns.
///
/// Each output consumes exactly one upstream volatility sample (only its
/// magnitude matters) and one standard-normal draw.
pub struct TruncatedReturns<V, R> {
    volatility: V,
    cap: f64,
    rng: R,
}

impl<V, R> TruncatedReturns<V, R> {
    pub fn new(volatility: V, cap: f64, rng: R) -> Self {
        Self { volatility, cap, rng }
    }
}

impl<V, R> Iterator for TruncatedReturns<V, R>
where
    V: Iterator<Item = f64>,
    R: Rng,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let scale = self.volatility.next()?.abs();
        let eps: f64 = self.rng.sample(StandardNormal);
        let capped = (scale * eps).min(self.cap);
        Some(capped - capped_mean(scale, self.cap))
    }
}

/// Conditional mean of `min(scale·ε, cap)` for standard-normal ε.
#[inline]
fn capped_mean(scale: f64, cap: f64) -> f64 {
    let z = cap / scale;
    cap * (1.0 - standard_normal_cdf(z)) - scale * standard_normal_pdf(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Ar1Volatility;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_capped_mean_reference_values() {
        // A cap far in the upper tail leaves the mean at zero
        assert!(capped_mean(1.0, 40.0).abs() < 1e-9);

        // Cap at zero: E[min(s·ε, 0)] = -s·φ(0)
        let expected = -2.0 * 0.3989422804014327;
        assert!((capped_mean(2.0, 0.0) - expected).abs() < 1e-7);

        // The mean of a capped draw is negative once the cap bites
        for scale in [0.5, 1.0, 3.0] {
            assert!(capped_mean(scale, 1.0) < 0.0);
        }
    }

    #[test]
    fn test_outputs_respect_the_cap() {
        let cap = 1.0;
        let scale = 2.0;
        let volatility = std::iter::repeat(scale).take(20_000);
        let returns = TruncatedReturns::new(volatility, cap, StdRng::seed_from_u64(8));

        let bound = cap - capped_mean(scale, cap);
        for x in returns {
            assert!(x <= bound + 1e-12, "return {x} above bound {bound}");
        }
    }

    #[test]
    fn test_centering_kills_the_mean() {
        let volatility = Ar1Volatility::new(0.5, StdRng::seed_from_u64(21));
        let returns = TruncatedReturns::new(volatility, 1.0, StdRng::seed_from_u64(22));

        let n = 200_000;
        let mean = returns.take(n).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02, "mean = {mean}");
    }

    #[test]
    fn test_one_volatility_draw_per_output() {
        // A finite upstream yields exactly as many returns
        let volatility = vec![0.3, 1.2, 0.7].into_iter();
        let returns = TruncatedReturns::new(volatility, 1.0, StdRng::seed_from_u64(5));
        assert_eq!(returns.count(), 3);
    }
}

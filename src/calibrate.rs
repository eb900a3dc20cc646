//! End-to-end threshold calibration
//!
//! Wires the process chain into a trader and drives the SPSA search over
//! its buy/sell thresholds. The loss handed to the search is the negated
//! average per-period return of a single trade cycle, so minimizing it
//! maximizes the expected return; successive cycles keep extending the same
//! market timeline, which makes the loss noisy but cheap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::process::{Ar1Volatility, RandomWalk, TruncatedReturns};
use crate::spsa::{KwSpsa, SpsaResult};
use crate::trading::ThresholdTrader;

/// Upper bound on a single-period log-return.
const RETURN_CAP: f64 = 1.0;

/// Starting logarithmic price level.
const START_LEVEL: f64 = 0.0;

/// Outer iteration cap for the threshold search.
pub const MAX_ITERATIONS: usize = 50;

/// Componentwise relative tolerance for declaring convergence.
const RELATIVE_TOLERANCE: f64 = 1e-3;

/// Componentwise absolute tolerance for declaring convergence.
const ABSOLUTE_TOLERANCE: f64 = 1e-6;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Builds the synthetic log-price walk for volatility persistence `rho`,
/// deriving each component's generator from the given root.
fn synthetic_prices(rho: f64, seeder: &mut StdRng) -> impl Iterator<Item = f64> {
    let volatility = Ar1Volatility::new(rho, StdRng::seed_from_u64(seeder.gen()));
    let returns = TruncatedReturns::new(volatility, RETURN_CAP, StdRng::seed_from_u64(seeder.gen()));
    RandomWalk::new(returns, START_LEVEL)
}

/// Wires a trader onto a fresh synthetic market.
///
/// `Some(seed)` makes the whole market replayable; `None` seeds from
/// entropy.
pub fn market_trader(rho: f64, seed: Option<u64>) -> ThresholdTrader<impl Iterator<Item = f64>> {
    let mut seeder = rng_from(seed);
    ThresholdTrader::new(synthetic_prices(rho, &mut seeder))
}

/// Searches for the best `(low, high)` threshold pair on a market with
/// volatility persistence `rho`.
///
/// Starts from (−1, 1) and runs at most [`MAX_ITERATIONS`] rounds; from the
/// second round on, stops early once successive estimates agree
/// componentwise within the relative/absolute tolerances, returning the
/// earlier of the two. Hitting the cap logs a warning and returns the last
/// estimate.
///
/// The only failure is an unordered initial guess, which the fixed (−1, 1)
/// start never triggers.
///
/// # Examples
///
/// ```
/// let theta = tradesim::calibrate::find_optimal_theta(0.0, Some(3)).unwrap();
/// assert!(theta[0] < theta[1]);
/// ```
pub fn find_optimal_theta(rho: f64, seed: Option<u64>) -> SpsaResult<[f64; 2]> {
    let mut seeder = rng_from(seed);
    let mut trader = ThresholdTrader::new(synthetic_prices(rho, &mut seeder));
    let loss = move |theta: [f64; 2]| -trader.trade(theta[0], theta[1]).1;

    let search = KwSpsa::new(loss, [-1.0, 1.0], StdRng::seed_from_u64(seeder.gen()))?;

    let mut theta = [-1.0, 1.0];
    for (round, candidate) in search.take(MAX_ITERATIONS).enumerate() {
        if round > 0 && all_close(theta, candidate) {
            return Ok(theta);
        }
        theta = candidate;
    }

    log::warn!("threshold search stopped at the iteration cap ({MAX_ITERATIONS}) without converging");
    Ok(theta)
}

/// Componentwise closeness, `|a − b| ≤ atol + rtol·|b|`.
fn all_close(previous: [f64; 2], current: [f64; 2]) -> bool {
    previous
        .iter()
        .zip(current.iter())
        .all(|(a, b)| (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_close_tolerances() {
        assert!(all_close([1.0, -1.0], [1.0009, -1.0009]));
        assert!(!all_close([1.0, -1.0], [1.002, -1.0]));
        assert!(all_close([0.0, 0.0], [5e-7, -5e-7]));
        assert!(!all_close([0.0, 0.0], [2e-6, 0.0]));
    }

    #[test]
    fn test_market_trader_is_replayable() {
        let mut a = market_trader(0.7, Some(12));
        let mut b = market_trader(0.7, Some(12));
        assert_eq!(a.trade(-0.5, 0.5), b.trade(-0.5, 0.5));
    }
}

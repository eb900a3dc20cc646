//! Stationary AR(1) volatility
//!
//! The volatility driver is a first-order autoregression,
//!
//! x_{t+1} = ρ·x_t + ε_t,   ε_t ~ N(0, 1)
//!
//! started from its own equilibrium so the sequence is stationary from the
//! very first sample and needs no burn-in.

use rand::Rng;
use rand_distr::StandardNormal;

/// Unbounded AR(1) volatility sequence.
///
/// The initial value is drawn from the stationary marginal N(0, 1/(1−ρ²)).
/// Callers must keep |ρ| < 1; outside that range the stationary scale is
/// undefined and so is the sequence.
///
/// Each `next()` yields the current state, then evolves it one step, so the
/// value observed downstream is always the pre-update state.
pub struct Ar1Volatility<R> {
    rho: f64,
    state: f64,
    rng: R,
}

impl<R: Rng> Ar1Volatility<R> {
    pub fn new(rho: f64, mut rng: R) -> Self {
        let z: f64 = rng.sample(StandardNormal);
        // Stationary marginal has variance 1/(1 - rho^2)
        let state = z / (1.0 - rho * rho).sqrt();
        Self { rho, state, rng }
    }
}

impl<R: Rng> Iterator for Ar1Volatility<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let current = self.state;
        let eps: f64 = self.rng.sample(StandardNormal);
        self.state = self.rho * self.state + eps;
        Some(current)
    }
}

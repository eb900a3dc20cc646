//! Kiefer–Wolfowitz simultaneous perturbation search
//!
//! Minimizes a noisy loss over a two-component threshold vector without
//! analytic gradients. Each update evaluates the loss at two symmetrically
//! perturbed points only,
//!
//! H = (L(θ + Δ) − L(θ − Δ)) / (2·Δ)   (elementwise),
//!
//! with Δ a Rademacher vector scaled by c = √a and step size a = 1/k. A
//! candidate θ − a·H is accepted only while it keeps the thresholds
//! ordered; a rejected candidate advances k and retries with a smaller
//! step. Accepted candidates deliberately leave k untouched, so the
//! schedule anneals on rejections alone.

use rand::Rng;

/// Result alias for threshold-search operations.
pub type SpsaResult<T> = Result<T, SpsaError>;

/// Errors surfaced when constructing the threshold search.
#[derive(Debug, Clone, PartialEq)]
pub enum SpsaError {
    /// The initial guess must satisfy `low < high`.
    UnorderedThresholds { low: f64, high: f64 },
}

impl std::error::Error for SpsaError {}

impl std::fmt::Display for SpsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpsaError::UnorderedThresholds { low, high } => {
                write!(
                    f,
                    "initial thresholds out of order: low {low} must be strictly below high {high}"
                )
            }
        }
    }
}

/// Decreasing-step SPSA minimizer over an ordered threshold pair.
///
/// Behaves as an unbounded iterator of estimates: every `next()` yields the
/// current vector before computing its successor, so the first value is the
/// initial guess and no loss evaluation happens until the second pull. The
/// search never terminates on its own; the caller decides when to stop.
pub struct KwSpsa<L, R> {
    loss: L,
    theta: [f64; 2],
    k: u64,
    rng: R,
    started: bool,
}

impl<L, R> KwSpsa<L, R>
where
    L: FnMut([f64; 2]) -> f64,
    R: Rng,
{
    /// Validates the initial guess and seats the search on it.
    pub fn new(loss: L, theta0: [f64; 2], rng: R) -> SpsaResult<Self> {
        if !(theta0[0] < theta0[1]) {
            return Err(SpsaError::UnorderedThresholds {
                low: theta0[0],
                high: theta0[1],
            });
        }
        Ok(Self { loss, theta: theta0, k: 1, rng, started: false })
    }

    /// One Rademacher component at scale `c`.
    fn perturbation(&mut self, c: f64) -> f64 {
        if self.rng.gen_bool(0.5) {
            c
        } else {
            -c
        }
    }

    /// Retries perturbed updates until one keeps the thresholds ordered.
    fn advance(&mut self) {
        loop {
            let a = 1.0 / self.k as f64;
            let c = a.sqrt();

            let delta = [self.perturbation(c), self.perturbation(c)];
            let up = [self.theta[0] + delta[0], self.theta[1] + delta[1]];
            let down = [self.theta[0] - delta[0], self.theta[1] - delta[1]];
            let diff = (self.loss)(up) - (self.loss)(down);

            let candidate = [
                self.theta[0] - a * 0.5 * diff / delta[0],
                self.theta[1] - a * 0.5 * diff / delta[1],
            ];
            if candidate[0] < candidate[1] {
                self.theta = candidate;
                return;
            }
            // Infeasible: shrink the schedule and try again
            self.k += 1;
        }
    }
}

impl<L, R> Iterator for KwSpsa<L, R>
where
    L: FnMut([f64; 2]) -> f64,
    R: Rng,
{
    type Item = [f64; 2];

    fn next(&mut self) -> Option<[f64; 2]> {
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        Some(self.theta)
    }
}

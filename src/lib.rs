//! # Tradesim Library
//!
//! Simulation-and-optimization kernel for a threshold-triggered
//! "buy low, sell high" trading rule on a synthetic market.
//!
//! The market is a chain of lazily evaluated infinite sequences: AR(1)
//! volatility scales each truncated, mean-centered log-return, and the
//! running sum of returns is the logarithmic price level. A trader consumes
//! the price sequence one buy/sell cycle at a time, and a Kiefer–Wolfowitz
//! simultaneous perturbation search adjusts the two thresholds to maximize
//! the expected per-period return.
//!
//! ## Design Philosophy
//!
//! - **Pull-based**: every sequence is an infinite `Iterator<Item = f64>`;
//!   each stage owns its upstream stage and advances it strictly on demand
//! - **Single-threaded**: no shared state, no locks, no async
//! - **Deterministic on demand**: every stochastic component takes its
//!   generator through the constructor, so seeded runs replay exactly
//!
//! ## Modules
//!
//! - `process`: volatility → return → price sequence chain
//! - `trading`: threshold-rule simulator over one continuous timeline
//! - `spsa`: Kiefer–Wolfowitz simultaneous perturbation search
//! - `calibrate`: end-to-end wiring and the threshold search driver
//! - `probability`: standard-normal helpers shared by the return process
//!
//! ## Example
//!
//! ```
//! use tradesim::prelude::*;
//!
//! // Calibrate buy/sell thresholds on a market with persistent volatility.
//! let theta = find_optimal_theta(0.5, Some(11)).expect("initial guess is ordered");
//! assert!(theta[0] < theta[1]);
//! ```

pub mod calibrate;
pub mod probability;
pub mod process;
pub mod spsa;
pub mod trading;

/// Common imports
pub mod prelude {
    pub use crate::calibrate::{find_optimal_theta, market_trader, MAX_ITERATIONS};

    pub use crate::process::{Ar1Volatility, RandomWalk, TruncatedReturns};

    pub use crate::spsa::{KwSpsa, SpsaError, SpsaResult};

    pub use crate::trading::ThresholdTrader;
}

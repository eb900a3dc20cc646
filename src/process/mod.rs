//! Lazily evaluated market processes
//!
//! The synthetic market is a chain of three infinite, stateful sequences:
//! an AR(1) volatility level, the truncated and centered log-return it
//! scales, and the running sum of returns as the logarithmic price. Each
//! stage owns the stage upstream of it and pulls exactly what it needs per
//! output, so the whole pipeline advances strictly on demand and never
//! restarts.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tradesim::process::{Ar1Volatility, RandomWalk, TruncatedReturns};
//!
//! let volatility = Ar1Volatility::new(0.8, StdRng::seed_from_u64(1));
//! let returns = TruncatedReturns::new(volatility, 1.0, StdRng::seed_from_u64(2));
//! let mut prices = RandomWalk::new(returns, 0.0);
//!
//! // The walk always opens at its starting level.
//! assert_eq!(prices.next(), Some(0.0));
//! ```

mod price;
mod returns;
mod volatility;

pub use price::RandomWalk;
pub use returns::TruncatedReturns;
pub use volatility::Ar1Volatility;

//! Logarithmic price level
//!
//! The price is the running sum of the return sequence. With the returns
//! centered to zero conditional mean, the walk behaves as a martingale.

/// Running sum of an owned increment sequence.
///
/// Yields the current level before consuming the next increment, so the
/// first value is exactly the starting level.
pub struct RandomWalk<X> {
    increments: X,
    level: f64,
}

impl<X> RandomWalk<X> {
    pub fn new(increments: X, start: f64) -> Self {
        Self { increments, level: start }
    }
}

impl<X: Iterator<Item = f64>> Iterator for RandomWalk<X> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let level = self.level;
        self.level += self.increments.next()?;
        Some(level)
    }
}

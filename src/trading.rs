//! Threshold-triggered trading simulation
//!
//! A trader that buys once the log-price drops below a lower threshold and
//! sells once it rises above an upper one. The trader owns its price
//! sequence exclusively and keeps its bookkeeping across calls, so repeated
//! trades walk one continuous market timeline rather than restarted
//! samples.

/// Simulates a buy-low/sell-high rule over one continuous price timeline.
///
/// # Fields
///
/// The internal state is the last completed cycle: cumulative buy and sell
/// step counts plus the prices observed at those steps. Construction seats
/// both anchors on the first price sample; each [`trade`] call rolls them
/// forward.
///
/// [`trade`]: ThresholdTrader::trade
pub struct ThresholdTrader<S> {
    prices: S,
    buy_time: usize,
    sell_time: usize,
    buy_price: f64,
    sell_price: f64,
}

impl<S: Iterator<Item = f64>> ThresholdTrader<S> {
    /// Seats the trader on a price sequence, consuming its first sample as
    /// the initial anchor.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty; price processes are unbounded by
    /// contract.
    pub fn new(mut prices: S) -> Self {
        let first = prices.next().expect("price sequence must be unbounded");
        Self {
            prices,
            buy_time: 0,
            sell_time: 0,
            buy_price: first,
            sell_price: first,
        }
    }

    fn next_price(&mut self) -> f64 {
        self.prices.next().expect("price sequence must be unbounded")
    }

    /// Runs one buy-then-sell cycle and reports
    /// `(holding steps, average per-step return)`.
    ///
    /// Starting from the previous sell point, waits for the price to drop
    /// below `low` and buys, then waits for it to rise above `high` and
    /// sells. A pair with `low > high` never trades: the call returns
    /// `(0, 0.0)` without consuming a single price sample or touching the
    /// trader's state.
    ///
    /// Both wait loops terminate with probability one (the increments have
    /// full support) but carry no step cap; capping them would bias the
    /// sampled outcomes.
    pub fn trade(&mut self, low: f64, high: f64) -> (usize, f64) {
        if low > high {
            return (0, 0.0);
        }

        // Buy phase: re-anchor on the last sell, wait for a dip below low
        self.buy_time = self.sell_time;
        self.buy_price = self.sell_price;
        while self.buy_price >= low {
            self.buy_price = self.next_price();
            self.buy_time += 1;
        }

        // Sell phase: hold until the price clears high
        self.sell_time = self.buy_time;
        self.sell_price = self.buy_price;
        while self.sell_price <= high {
            self.sell_price = self.next_price();
            self.sell_time += 1;
        }

        let held = self.sell_time - self.buy_time;
        (held, (self.sell_price - self.buy_price) / held as f64)
    }
}

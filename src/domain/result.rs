use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One completed backtest as returned by the backend.
///
/// `dates`, `close`, `sma_short` and `sma_long` are positionally aligned.
/// Trade markers and the equity curve each have their own independent length.
/// Once received this is shared behind an `Arc` and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BacktestResult {
    pub dates: Vec<String>,
    pub close: Vec<f64>,
    pub sma_short: Vec<f64>,
    pub sma_long: Vec<f64>,

    pub buy_dates: Vec<String>,
    pub buy_prices: Vec<f64>,
    pub sell_dates: Vec<String>,
    pub sell_prices: Vec<f64>,

    pub eq_dates: Vec<String>,
    pub equity: Vec<f64>,

    /// Opaque metric name -> value map, key order as received.
    pub summary: Map<String, Value>,
}

impl BacktestResult {
    /// Parses a response body. The error text is what the user gets to see.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Whether the four price series share one length.
    pub fn is_price_aligned(&self) -> bool {
        let n = self.dates.len();
        self.close.len() == n && self.sma_short.len() == n && self.sma_long.len() == n
    }

    pub fn trade_count(&self) -> usize {
        self.buy_dates.len() + self.sell_dates.len()
    }
}

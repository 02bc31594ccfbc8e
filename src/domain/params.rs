use crate::config::DEFAULTS;

/// User-entered backtest parameters.
///
/// Held as the raw text from the input fields. Nothing is validated
/// client-side: an empty ticker or an inverted date range is sent as-is and
/// the backend decides what it means.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BacktestParams {
    pub ticker: String,
    /// YYYY-MM-DD
    pub start: String,
    /// YYYY-MM-DD
    pub end: String,
}

impl Default for BacktestParams {
    fn default() -> Self {
        Self {
            ticker: DEFAULTS.ticker.to_string(),
            start: DEFAULTS.start.to_string(),
            end: DEFAULTS.end.to_string(),
        }
    }
}

impl BacktestParams {
    pub fn new(
        ticker: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Query string pairs in wire order. The HTTP client does the encoding.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("ticker", self.ticker.as_str()),
            ("start", self.start.as_str()),
            ("end", self.end.as_str()),
        ]
    }

    // Symbols are case-insensitive, so the display form is always upper case.
    pub fn display_ticker(&self) -> String {
        self.ticker.trim().to_uppercase()
    }
}

impl std::fmt::Display for BacktestParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} [{} → {}]", self.display_ticker(), self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reset_values() {
        let params = BacktestParams::default();
        assert_eq!(params.ticker, "AAPL");
        assert_eq!(params.start, "2023-01-01");
        assert_eq!(params.end, "2024-12-31");
    }

    #[test]
    fn query_pairs_keep_raw_values_in_order() {
        let params = BacktestParams::new("", "2024-01-01", "2023-01-01");
        let pairs = params.query_pairs();
        assert_eq!(pairs[0], ("ticker", ""));
        assert_eq!(pairs[1], ("start", "2024-01-01"));
        assert_eq!(pairs[2], ("end", "2023-01-01"));
    }

    #[test]
    fn display_ticker_is_upper_case() {
        let params = BacktestParams::new(" msft ", "2023-06-01", "2023-12-31");
        assert_eq!(params.display_ticker(), "MSFT");
        assert_eq!(params.to_string(), "MSFT [2023-06-01 → 2023-12-31]");
    }
}

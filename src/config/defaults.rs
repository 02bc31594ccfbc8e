//! Parameter defaults restored on startup and on reset.

pub struct ParamDefaults {
    pub ticker: &'static str,
    /// YYYY-MM-DD
    pub start: &'static str,
    /// YYYY-MM-DD
    pub end: &'static str,
}

pub const DEFAULTS: ParamDefaults = ParamDefaults {
    ticker: "AAPL",
    start: "2023-01-01",
    end: "2024-12-31",
};

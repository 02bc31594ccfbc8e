//! Backend collaborator configuration.

/// Where the backtest computation service lives and how to call it.
pub struct BackendConfig {
    /// Base address of the backend (scheme, host, port). No trailing slash.
    pub base_url: &'static str,
    /// Path of the backtest endpoint, appended to `base_url`.
    pub backtest_path: &'static str,
    /// Message shown for any non-success HTTP status. The body is not inspected.
    pub status_error_message: &'static str,
}

pub const BACKEND: BackendConfig = BackendConfig {
    base_url: "http://localhost:5000",
    backtest_path: "/backtest",
    status_error_message: "Backend error",
};

impl BackendConfig {
    /// Full endpoint URL for a given base address.
    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.backtest_path)
    }
}

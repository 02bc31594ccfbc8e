use std::fmt;

use crate::config::BACKEND;

/// Why a backtest request failed.
///
/// The user only ever sees the message text; the variant exists for logging
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BacktestError {
    /// No response arrived (connection refused, DNS, reset mid-body, ...)
    Transport(String),
    /// The backend answered with a non-success status. The body is ignored.
    Status(u16),
    /// The body was not a valid backtest result
    Parse(String),
}

impl fmt::Display for BacktestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BacktestError::Transport(msg) | BacktestError::Parse(msg) if !msg.trim().is_empty() => {
                write!(f, "{}", msg)
            }
            _ => write!(f, "{}", BACKEND.status_error_message),
        }
    }
}

impl std::error::Error for BacktestError {}

impl From<reqwest::Error> for BacktestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BacktestError::Parse(err.to_string())
        } else {
            BacktestError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BacktestError {
    fn from(err: serde_json::Error) -> Self {
        BacktestError::Parse(err.to_string())
    }
}

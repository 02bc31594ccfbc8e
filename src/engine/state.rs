use std::sync::Arc;

use strum_macros::Display;

use crate::domain::BacktestResult;

/// Lifecycle of the single backtest request a session can have in flight.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    #[default]
    Idle,
    /// A request is in flight. `previous` keeps the last successful result
    /// on screen until this one settles.
    Loading {
        previous: Option<Arc<BacktestResult>>,
    },
    Succeeded(Arc<BacktestResult>),
    Failed(String),
}

/// Payload-free view of [`RequestState`], for logs and status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        match self {
            RequestState::Idle => Phase::Idle,
            RequestState::Loading { .. } => Phase::Loading,
            RequestState::Succeeded(_) => Phase::Succeeded,
            RequestState::Failed(_) => Phase::Failed,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    /// The result the panels should show, if any.
    pub fn result(&self) -> Option<&Arc<BacktestResult>> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            RequestState::Loading { previous } => previous.as_ref(),
            RequestState::Idle | RequestState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// The state entered when a run is triggered from `self`.
    pub(super) fn to_loading(&self) -> RequestState {
        let previous = match self {
            RequestState::Succeeded(result) => Some(Arc::clone(result)),
            RequestState::Loading { previous } => previous.clone(),
            RequestState::Idle | RequestState::Failed(_) => None,
        };
        RequestState::Loading { previous }
    }
}

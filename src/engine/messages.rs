use std::time::Duration;

use crate::domain::{BacktestParams, BacktestResult};
use crate::engine::BacktestError;

/// Sequence number identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(pub u64);

impl std::fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A request the controller has accepted and wants sent.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    /// Snapshot of the params at submission time. Later edits don't affect it.
    pub params: BacktestParams,
}

/// The outcome of one request, tagged with the ticket it was issued under.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub ticket: RequestTicket,
    pub outcome: Result<BacktestResult, BacktestError>,
    pub elapsed: Duration,
}

impl Settlement {
    pub fn new(ticket: RequestTicket, outcome: Result<BacktestResult, BacktestError>) -> Self {
        Self {
            ticket,
            outcome,
            elapsed: Duration::ZERO,
        }
    }
}

use std::sync::Arc;

use crate::domain::{BacktestParams, BacktestResult};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::messages::{PendingRequest, RequestTicket, Settlement};
use super::state::RequestState;

/// What happened to a settlement handed to [`RequestController::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Succeeded,
    Failed,
    /// A newer run or a reset superseded this request. State untouched.
    Stale,
}

/// Owns the user's parameters and the lifecycle of the backtest request.
///
/// The view reads through [`params`](Self::params) and [`state`](Self::state)
/// and changes things only through `params_mut`, `begin_run`, `settle` and
/// `reset`. The network call itself happens elsewhere: `begin_run` hands out
/// a [`PendingRequest`], and whoever performs it feeds the tagged
/// [`Settlement`] back in.
#[derive(Debug, Default)]
pub struct RequestController {
    params: BacktestParams,
    state: RequestState,
    /// Last ticket handed out. Monotonic for the life of the session.
    last_issued: u64,
    /// The only request allowed to settle. Cleared by reset and by settlement.
    in_flight: Option<PendingRequest>,
    /// Params the currently shown result was computed for.
    result_params: Option<BacktestParams>,
}

impl RequestController {
    pub fn new(params: BacktestParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn params(&self) -> &BacktestParams {
        &self.params
    }

    /// Params stay editable in every state, including while loading.
    pub fn params_mut(&mut self) -> &mut BacktestParams {
        &mut self.params
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn result(&self) -> Option<&Arc<BacktestResult>> {
        self.state.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The run control is disabled exactly while a request is in flight.
    pub fn can_run(&self) -> bool {
        !self.is_loading()
    }

    pub fn awaiting(&self) -> Option<RequestTicket> {
        self.in_flight.as_ref().map(|pending| pending.ticket)
    }

    /// Params behind [`result`](Self::result), not the ones being edited.
    pub fn result_params(&self) -> Option<&BacktestParams> {
        self.result().and(self.result_params.as_ref())
    }

    /// Trigger a run. Returns `None` while already loading.
    pub fn begin_run(&mut self) -> Option<PendingRequest> {
        if !self.can_run() {
            log::debug!("Run ignored: request {:?} still in flight", self.awaiting());
            return None;
        }

        self.last_issued += 1;
        let pending = PendingRequest {
            ticket: RequestTicket(self.last_issued),
            params: self.params.clone(),
        };
        self.in_flight = Some(pending.clone());
        self.state = self.state.to_loading();

        log::info!("▶ Backtest {} started for {}", pending.ticket, pending.params);

        Some(pending)
    }

    /// Apply a finished request, unless something newer has superseded it.
    pub fn settle(&mut self, settlement: Settlement) -> SettleOutcome {
        let Settlement {
            ticket,
            outcome,
            elapsed,
        } = settlement;

        if self.awaiting() != Some(ticket) || !self.is_loading() {
            log::warn!(
                "Discarding stale settlement {} (awaiting {:?}, state {})",
                ticket,
                self.awaiting(),
                self.state.phase()
            );
            return SettleOutcome::Stale;
        }

        let Some(request) = self.in_flight.take() else {
            return SettleOutcome::Stale;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("Backtest {} settled in {:.2}s", ticket, elapsed.as_secs_f32());
        }
        #[cfg(not(debug_assertions))]
        let _ = elapsed;

        match outcome {
            Ok(result) => {
                if !result.is_price_aligned() {
                    log::warn!(
                        "Backtest {}: price series lengths differ (dates {}, close {}, sma_short {}, sma_long {})",
                        ticket,
                        result.dates.len(),
                        result.close.len(),
                        result.sma_short.len(),
                        result.sma_long.len()
                    );
                }
                log::info!(
                    "✅ Backtest {} succeeded: {} bars, {} trades",
                    ticket,
                    result.dates.len(),
                    result.trade_count()
                );
                self.state = RequestState::Succeeded(Arc::new(result));
                self.result_params = Some(request.params);
                SettleOutcome::Succeeded
            }
            Err(error) => {
                log::error!("❌ Backtest {} failed: {}", ticket, error);
                self.state = RequestState::Failed(error.to_string());
                self.result_params = None;
                SettleOutcome::Failed
            }
        }
    }

    /// Back to a clean slate. Any request still in flight becomes stale.
    pub fn reset(&mut self) {
        if let Some(pending) = self.in_flight.take() {
            log::info!("🔄 Reset while {} in flight; its result will be ignored", pending.ticket);
        } else {
            log::info!("🔄 Reset");
        }
        self.params = BacktestParams::default();
        self.state = RequestState::Idle;
        self.result_params = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BacktestError;
    use crate::engine::state::Phase;

    fn sample_result(close: f64) -> BacktestResult {
        BacktestResult {
            dates: vec!["2023-06-01".into()],
            close: vec![close],
            sma_short: vec![close],
            sma_long: vec![close],
            buy_dates: vec![],
            buy_prices: vec![],
            sell_dates: vec![],
            sell_prices: vec![],
            eq_dates: vec!["2023-06-01".into()],
            equity: vec![1000.0],
            summary: Default::default(),
        }
    }

    fn ok(ticket: RequestTicket, close: f64) -> Settlement {
        Settlement::new(ticket, Ok(sample_result(close)))
    }

    #[test]
    fn starts_idle_with_defaults() {
        let controller = RequestController::default();
        assert_eq!(controller.state().phase(), Phase::Idle);
        assert_eq!(controller.params(), &BacktestParams::default());
        assert!(controller.can_run());
        assert!(controller.result().is_none());
        assert!(controller.error().is_none());
    }

    #[test]
    fn run_moves_to_loading_and_blocks_reentry() {
        let mut controller = RequestController::default();
        let pending = controller.begin_run().unwrap();
        assert_eq!(pending.ticket, RequestTicket(1));
        assert!(controller.is_loading());
        assert!(!controller.can_run());
        assert!(controller.begin_run().is_none());
        assert_eq!(controller.awaiting(), Some(RequestTicket(1)));
    }

    #[test]
    fn pending_request_snapshots_params() {
        let mut controller = RequestController::default();
        controller.params_mut().ticker = "MSFT".into();
        let pending = controller.begin_run().unwrap();
        controller.params_mut().ticker = "GOOG".into();
        assert_eq!(pending.params.ticker, "MSFT");
        assert_eq!(controller.params().ticker, "GOOG");
    }

    #[test]
    fn success_replaces_result_wholesale() {
        let mut controller = RequestController::default();
        let first = controller.begin_run().unwrap();
        assert_eq!(controller.settle(ok(first.ticket, 1.0)), SettleOutcome::Succeeded);

        let second = controller.begin_run().unwrap();
        // Stale data remains visible while the second run is loading.
        assert_eq!(controller.result().unwrap().close, vec![1.0]);

        assert_eq!(controller.settle(ok(second.ticket, 2.0)), SettleOutcome::Succeeded);
        assert_eq!(controller.result().unwrap().close, vec![2.0]);
        assert_eq!(controller.state().phase(), Phase::Succeeded);
    }

    #[test]
    fn result_params_track_the_submitted_request() {
        let mut controller = RequestController::default();
        controller.params_mut().ticker = "msft".into();
        let pending = controller.begin_run().unwrap();
        controller.params_mut().ticker = "typing...".into();
        controller.settle(ok(pending.ticket, 1.0));
        assert_eq!(controller.result_params().unwrap().ticker, "msft");

        controller.reset();
        assert!(controller.result_params().is_none());
    }

    #[test]
    fn failure_clears_previous_result() {
        let mut controller = RequestController::default();
        let first = controller.begin_run().unwrap();
        controller.settle(ok(first.ticket, 1.0));

        let second = controller.begin_run().unwrap();
        let outcome = controller.settle(Settlement::new(
            second.ticket,
            Err(BacktestError::Status(500)),
        ));

        assert_eq!(outcome, SettleOutcome::Failed);
        assert_eq!(controller.error(), Some("Backend error"));
        assert!(controller.result().is_none());
        assert!(controller.can_run());
    }

    #[test]
    fn run_after_failure_clears_error() {
        let mut controller = RequestController::default();
        let first = controller.begin_run().unwrap();
        controller.settle(Settlement::new(
            first.ticket,
            Err(BacktestError::Transport("refused".into())),
        ));
        assert_eq!(controller.error(), Some("refused"));

        controller.begin_run().unwrap();
        assert!(controller.error().is_none());
        assert!(controller.result().is_none());
    }

    #[test]
    fn settlement_after_reset_is_ignored() {
        let mut controller = RequestController::default();
        controller.params_mut().ticker = "TSLA".into();
        let pending = controller.begin_run().unwrap();

        controller.reset();
        assert_eq!(controller.settle(ok(pending.ticket, 5.0)), SettleOutcome::Stale);

        assert_eq!(controller.state().phase(), Phase::Idle);
        assert!(controller.result().is_none());
        assert_eq!(controller.params(), &BacktestParams::default());
    }

    #[test]
    fn only_newest_ticket_may_settle() {
        let mut controller = RequestController::default();
        let old = controller.begin_run().unwrap();
        controller.reset();
        let new = controller.begin_run().unwrap();
        assert!(new.ticket > old.ticket);

        assert_eq!(controller.settle(ok(old.ticket, 1.0)), SettleOutcome::Stale);
        assert!(controller.is_loading());

        assert_eq!(controller.settle(ok(new.ticket, 2.0)), SettleOutcome::Succeeded);
        assert_eq!(controller.result().unwrap().close, vec![2.0]);

        // A duplicate settlement of an already-applied ticket changes nothing.
        assert_eq!(controller.settle(ok(new.ticket, 3.0)), SettleOutcome::Stale);
        assert_eq!(controller.result().unwrap().close, vec![2.0]);
    }

    #[test]
    fn reset_from_every_state_restores_defaults() {
        let mut controllers = Vec::new();

        controllers.push(RequestController::default());

        let mut loading = RequestController::default();
        loading.begin_run();
        controllers.push(loading);

        let mut succeeded = RequestController::default();
        let p = succeeded.begin_run().unwrap();
        succeeded.settle(ok(p.ticket, 1.0));
        controllers.push(succeeded);

        let mut failed = RequestController::default();
        let p = failed.begin_run().unwrap();
        failed.settle(Settlement::new(p.ticket, Err(BacktestError::Status(502))));
        controllers.push(failed);

        for mut controller in controllers {
            controller.params_mut().ticker = "NVDA".into();
            controller.params_mut().end = "2025-01-01".into();
            controller.reset();
            assert_eq!(controller.state().phase(), Phase::Idle);
            assert_eq!(controller.params().ticker, "AAPL");
            assert_eq!(controller.params().start, "2023-01-01");
            assert_eq!(controller.params().end, "2024-12-31");
            assert!(controller.error().is_none());
            assert!(controller.result().is_none());
            assert!(controller.awaiting().is_none());
        }
    }
}

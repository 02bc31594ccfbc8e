use eframe::egui;

use crate::engine::{SettleOutcome, worker};
use crate::ui::app::{DashboardApp, InFlight};

impl DashboardApp {
    /// The run trigger. A no-op while a request is already loading.
    pub fn start_run(&mut self) {
        let Some(pending) = self.controller.begin_run() else {
            return;
        };

        let ticket = pending.ticket;
        let promise = worker::spawn_request(&self.runtime, self.source.clone(), pending);
        self.in_flight.push(InFlight { ticket, promise });
    }

    /// Collect every finished request and let the controller sort out which
    /// one still matters.
    pub fn poll_requests(&mut self, ctx: &egui::Context) {
        if self.in_flight.is_empty() {
            return;
        }

        let mut still_running = Vec::with_capacity(self.in_flight.len());
        for request in self.in_flight.drain(..) {
            match request.promise.try_take() {
                Ok(settlement) => {
                    let elapsed = settlement.elapsed;
                    match self.controller.settle(settlement) {
                        SettleOutcome::Succeeded | SettleOutcome::Failed => {
                            self.last_elapsed = Some(elapsed);
                        }
                        SettleOutcome::Stale => {}
                    }
                }
                Err(promise) => still_running.push(InFlight {
                    ticket: request.ticket,
                    promise,
                }),
            }
        }
        self.in_flight = still_running;

        if !self.in_flight.is_empty() {
            ctx.request_repaint();
        }
    }

    pub fn is_calculating(&self) -> bool {
        self.controller.is_loading()
    }

    /// Requests still running, stale ones included.
    pub fn outstanding_requests(&self) -> usize {
        self.in_flight.len()
    }
}

use eframe::{Frame, egui};
use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::domain::BacktestParams;
use crate::engine::{BacktestSource, RequestController, RequestTicket, Settlement};
use crate::render::PanelCache;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// A request that has been sent and not yet read back.
pub(super) struct InFlight {
    pub(super) ticket: RequestTicket,
    pub(super) promise: Promise<Settlement>,
}

pub struct DashboardApp {
    // Params + request lifecycle. The only mutable domain state in the app.
    pub(super) controller: RequestController,

    // Where requests go, and the runtime their futures run on
    pub(super) source: Arc<dyn BacktestSource>,
    pub(super) runtime: Handle,

    // Every request still running, including ones a reset made stale.
    // They are drained as they finish; none is ever cancelled.
    pub(super) in_flight: Vec<InFlight>,

    // Render state
    pub(super) panel_cache: PanelCache,
    pub(super) plot_view: PlotView,

    // Duration of the last applied request, for the status line
    pub(super) last_elapsed: Option<Duration>,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        source: Arc<dyn BacktestSource>,
        runtime: Handle,
    ) -> Self {
        log::info!("Backtest source: {}", source.signature());
        Self::with_source(source, runtime)
    }

    /// Build without a window; everything except drawing works.
    pub fn with_source(source: Arc<dyn BacktestSource>, runtime: Handle) -> Self {
        Self {
            controller: RequestController::new(BacktestParams::default()),
            source,
            runtime,
            in_flight: Vec::new(),
            panel_cache: PanelCache::new(),
            plot_view: PlotView::new(),
            last_elapsed: None,
        }
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    pub fn params_mut(&mut self) -> &mut BacktestParams {
        self.controller.params_mut()
    }

    pub(super) fn reset(&mut self) {
        self.controller.reset();
        self.panel_cache.clear();
        self.plot_view.clear_cache();
        self.last_elapsed = None;
    }
}

impl eframe::App for DashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Outstanding requests finish on their own threads; we just stop listening.
        let outstanding = self.in_flight.len();
        self.in_flight.clear();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!(
                "Application shutdown complete ({} request(s) abandoned).",
                outstanding
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = outstanding;
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_requests(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

use eframe::egui::{
    Button, CentralPanel, Context, CornerRadius, Frame, Margin, RichText, ScrollArea,
    TextEdit, TopBottomPanel, Ui,
};
use std::sync::Arc;

use crate::domain::BacktestResult;
use crate::engine::{Phase, RequestController};
use crate::render::RenderedPanels;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, spaced_separator};
use crate::utils::TimeUtils;

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::same(UI_CONFIG.card_padding));

        TopBottomPanel::top("params_panel")
            .frame(top_panel_frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.app_title);
                ui.add_space(12.0);

                ui.horizontal_wrapped(|ui| {
                    let params = self.controller.params_mut();
                    param_input(ui, UI_TEXT.ticker_label, &mut params.ticker);
                    param_input(ui, UI_TEXT.start_label, &mut params.start);
                    param_input(ui, UI_TEXT.end_label, &mut params.end);
                });

                ui.add_space(12.0);

                let mut run_clicked = false;
                let mut reset_clicked = false;
                ui.horizontal(|ui| {
                    let busy = self.is_calculating();
                    let label = if busy {
                        UI_TEXT.run_button_busy
                    } else {
                        UI_TEXT.run_button
                    };
                    run_clicked = ui
                        .add_enabled(!busy, Button::new(RichText::new(label).strong()))
                        .clicked();
                    reset_clicked = ui.button(UI_TEXT.reset_button).clicked();
                });

                // Reset wins if both land in the same frame.
                if run_clicked && !reset_clicked {
                    self.start_run();
                }
                if reset_clicked {
                    self.reset();
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label_subdued(status_text(&self.controller));

                if let Some(elapsed) = self.last_elapsed {
                    ui.separator();
                    ui.metric(
                        "Last request",
                        &TimeUtils::format_elapsed(elapsed),
                        UI_CONFIG.colors.subsection_heading,
                    );
                }

                if let Some(params) = self.controller.result_params() {
                    ui.separator();
                    ui.metric("Showing", &params.to_string(), UI_CONFIG.colors.heading);
                }
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(UI_CONFIG.card_padding));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                if let Some(error) = self.controller.error() {
                    error_banner(ui, error);
                    ui.add_space(16.0);
                }

                let result = match central_content(&self.controller) {
                    CentralContent::Panels(result) => result,
                    CentralContent::Placeholder => {
                        no_data_placeholder(ui);
                        return;
                    }
                    CentralContent::Nothing => return,
                };

                let ticker = self
                    .controller
                    .result_params()
                    .map(|p| p.ticker.clone())
                    .unwrap_or_default();
                let panels = self.panel_cache.get_or_render(&result, &ticker);

                ScrollArea::vertical().show(ui, |ui| {
                    self.render_panels(ui, &panels);
                });
            });
    }

    fn render_panels(&mut self, ui: &mut Ui, panels: &Arc<RenderedPanels>) {
        card_frame().show(ui, |ui| {
            ui.label_subheader(format!("{} {}", UI_TEXT.price_heading_icon, panels.price.title));
            self.plot_view.show_price_chart(ui, panels);
        });

        ui.add_space(UI_CONFIG.panel_spacing);

        card_frame().show(ui, |ui| {
            ui.label_subheader(format!("{} {}", UI_TEXT.equity_heading_icon, panels.equity.title));
            self.plot_view.show_equity_chart(ui, panels);
        });

        ui.add_space(UI_CONFIG.panel_spacing);

        card_frame().show(ui, |ui| {
            ui.label_subheader(format!("{} {}", UI_TEXT.summary_heading_icon, panels.summary.title));
            spaced_separator(ui);
            Frame::new()
                .fill(UI_CONFIG.colors.summary_background)
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::same(UI_CONFIG.card_padding))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&panels.summary.text).monospace());
                });
        });
    }
}

/// What the central panel draws below the error banner.
#[derive(Debug, Clone)]
pub(super) enum CentralContent {
    /// No result to show and nothing running.
    Placeholder,
    /// First request still running; the run button says enough.
    Nothing,
    /// The current result, or the previous one while a new run loads.
    Panels(Arc<BacktestResult>),
}

pub(super) fn central_content(controller: &RequestController) -> CentralContent {
    match controller.result() {
        Some(result) => CentralContent::Panels(Arc::clone(result)),
        None if controller.is_loading() => CentralContent::Nothing,
        None => CentralContent::Placeholder,
    }
}

pub(super) fn status_text(controller: &RequestController) -> String {
    let state = controller.state();
    match state.phase() {
        Phase::Idle => UI_TEXT.status_idle.to_string(),
        Phase::Loading if state.result().is_some() => {
            format!("{} {}", UI_TEXT.status_loading, UI_TEXT.status_stale_suffix)
        }
        Phase::Loading => UI_TEXT.status_loading.to_string(),
        Phase::Succeeded => UI_TEXT.status_succeeded.to_string(),
        Phase::Failed => UI_TEXT.status_failed.to_string(),
    }
}

fn param_input(ui: &mut Ui, label: &str, value: &mut String) {
    ui.vertical(|ui| {
        ui.label_subdued(label);
        ui.add(TextEdit::singleline(value).desired_width(UI_CONFIG.input_width));
    });
}

fn error_banner(ui: &mut Ui, message: &str) {
    Frame::new()
        .fill(UI_CONFIG.colors.error_background)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(UI_CONFIG.card_padding))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_error(format!("{} {}", UI_TEXT.error_prefix, message));
        });
}

fn no_data_placeholder(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            RichText::new(UI_TEXT.no_data_placeholder)
                .size(18.0)
                .color(UI_CONFIG.colors.placeholder),
        );
    });
}

use std::sync::Arc;

use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::render::{ChartPanel, LineDash, MarkerGlyph, RenderedPanels, SeriesSpec};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_price, to_color32, to_margin};
use crate::utils::TimeUtils;

/// One series with its dates already turned into plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedSeries {
    pub points: Vec<[f64; 2]>,
    /// Points whose date would not parse. They are left out, never guessed.
    pub dropped: usize,
}

impl PlottedSeries {
    pub fn from_spec(spec: &SeriesSpec) -> Self {
        let mut dropped = 0;
        let points = spec
            .points()
            .filter_map(|(date, y)| match TimeUtils::date_to_plot_x(date) {
                Some(x) => Some([x, y]),
                None => {
                    dropped += 1;
                    None
                }
            })
            .collect();

        Self { points, dropped }
    }
}

struct PlotCache {
    panels: Arc<RenderedPanels>,
    price: Vec<PlottedSeries>,
    equity: Vec<PlottedSeries>,
}

/// Draws chart descriptors with egui_plot.
#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn show_price_chart(&mut self, ui: &mut egui::Ui, panels: &Arc<RenderedPanels>) {
        let cache = self.plotted(panels);
        show_chart(ui, "price_chart", &panels.price, &cache.price, UI_TEXT.price_y_axis);
    }

    pub fn show_equity_chart(&mut self, ui: &mut egui::Ui, panels: &Arc<RenderedPanels>) {
        let cache = self.plotted(panels);
        show_chart(ui, "equity_chart", &panels.equity, &cache.equity, UI_TEXT.equity_y_axis);
    }

    /// Date parsing runs once per result; later frames borrow the cached points.
    fn plotted(&mut self, panels: &Arc<RenderedPanels>) -> &PlotCache {
        if !matches!(&self.cache, Some(cache) if Arc::ptr_eq(&cache.panels, panels)) {
            self.cache = None;
        }

        self.cache.get_or_insert_with(|| PlotCache {
            panels: Arc::clone(panels),
            price: plot_series(&panels.price),
            equity: plot_series(&panels.equity),
        })
    }
}

fn plot_series(panel: &ChartPanel) -> Vec<PlottedSeries> {
    panel
        .series
        .iter()
        .map(|spec| {
            let plotted = PlottedSeries::from_spec(spec);
            if plotted.dropped > 0 {
                log::warn!(
                    "{} / {}: dropped {} point(s) with unparseable dates",
                    panel.title,
                    spec.name,
                    plotted.dropped
                );
            }
            plotted
        })
        .collect()
}

fn show_chart(
    ui: &mut egui::Ui,
    id: &str,
    panel: &ChartPanel,
    plotted: &[PlottedSeries],
    y_label: &'static str,
) {
    let layout = &panel.layout;

    egui::Frame::new()
        .inner_margin(to_margin(layout.margin))
        .show(ui, |ui| {
            let mut plot = Plot::new(id)
                .height(layout.height)
                .legend(Legend::default().position(Corner::LeftTop))
                .custom_x_axes(vec![create_x_axis()])
                .custom_y_axes(vec![create_y_axis(y_label)])
                .label_formatter(|name, value| {
                    let date = TimeUtils::plot_x_to_date(value.x).unwrap_or_default();
                    if name.is_empty() {
                        format!("{}\n{}", date, format_price(value.y))
                    } else {
                        format!("{}\n{}\n{}", name, date, format_price(value.y))
                    }
                });

            if layout.responsive || layout.autosize {
                plot = plot.width(ui.available_width());
            }

            plot.show(ui, |plot_ui| {
                for (spec, series) in panel.series.iter().zip(plotted) {
                    if spec.mode.draws_line() {
                        if let Some(style) = &spec.line {
                            let mut line = Line::new(spec.name.clone(), PlotPoints::new(series.points.clone()))
                                .color(to_color32(style.color))
                                .width(style.width);
                            if style.dash == LineDash::Dash {
                                line = line.style(LineStyle::dashed_dense());
                            }
                            plot_ui.line(line);
                        }
                    }

                    if spec.mode.draws_markers() {
                        if let Some(style) = &spec.marker {
                            let points = Points::new(spec.name.clone(), PlotPoints::new(series.points.clone()))
                                .shape(marker_shape(style.glyph))
                                .radius(style.size / 2.0)
                                .color(to_color32(style.color))
                                .filled(true);
                            plot_ui.points(points);
                        }
                    }
                }
            });
        });
}

fn marker_shape(glyph: MarkerGlyph) -> MarkerShape {
    match glyph {
        MarkerGlyph::TriangleUp => MarkerShape::Up,
        MarkerGlyph::TriangleDown => MarkerShape::Down,
        MarkerGlyph::Circle => MarkerShape::Circle,
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            TimeUtils::plot_x_to_date(grid_mark.value).unwrap_or_default()
        })
}

fn create_y_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DisplayMode;

    fn spec(x: &[&str], y: &[f64]) -> SeriesSpec {
        SeriesSpec {
            name: "Equity".into(),
            x: x.iter().map(|s| s.to_string()).collect(),
            y: y.to_vec(),
            mode: DisplayMode::Lines,
            line: None,
            marker: None,
        }
    }

    #[test]
    fn dates_become_consecutive_day_numbers() {
        let plotted = PlottedSeries::from_spec(&spec(&["2023-06-01", "2023-06-02"], &[1000.0, 1010.0]));
        assert_eq!(plotted.dropped, 0);
        assert_eq!(plotted.points.len(), 2);
        assert_eq!(plotted.points[1][0] - plotted.points[0][0], 1.0);
        assert_eq!(plotted.points[1][1], 1010.0);
    }

    #[test]
    fn bad_dates_are_dropped_not_invented() {
        let plotted = PlottedSeries::from_spec(&spec(&["0", "2023-06-02"], &[10_000.0, 10_010.0]));
        assert_eq!(plotted.dropped, 1);
        assert_eq!(plotted.points.len(), 1);
        assert_eq!(plotted.points[0][1], 10_010.0);
    }

    #[test]
    fn empty_series_plots_nothing() {
        let plotted = PlottedSeries::from_spec(&spec(&[], &[]));
        assert!(plotted.points.is_empty());
        assert_eq!(plotted.dropped, 0);
    }

    fn panels() -> Arc<RenderedPanels> {
        let result = crate::domain::BacktestResult {
            dates: vec!["2023-06-01".into(), "2023-06-02".into()],
            close: vec![10.0, 11.0],
            sma_short: vec![10.0, 10.5],
            sma_long: vec![9.0, 9.5],
            buy_dates: vec!["2023-06-01".into()],
            buy_prices: vec![10.0],
            sell_dates: vec![],
            sell_prices: vec![],
            eq_dates: vec!["2023-06-01".into(), "2023-06-02".into()],
            equity: vec![1000.0, 1010.0],
            summary: Default::default(),
        };
        Arc::new(crate::render::render_panels(&result, "MSFT"))
    }

    #[test]
    fn plotted_points_are_reused_for_the_same_panels() {
        let mut view = PlotView::new();
        let panels = panels();

        let first: *const PlotCache = view.plotted(&panels);
        let second: *const PlotCache = view.plotted(&panels);
        assert!(std::ptr::eq(first, second));

        let cache = view.plotted(&panels);
        assert_eq!(cache.price.len(), 5);
        assert_eq!(cache.equity[0].points, vec![
            [TimeUtils::date_to_plot_x("2023-06-01").unwrap(), 1000.0],
            [TimeUtils::date_to_plot_x("2023-06-02").unwrap(), 1010.0],
        ]);
    }

    #[test]
    fn new_panels_replace_the_cache() {
        let mut view = PlotView::new();
        let old = panels();
        view.plotted(&old);

        let new = panels();
        let cache = view.plotted(&new);
        assert!(Arc::ptr_eq(&cache.panels, &new));

        view.clear_cache();
        assert!(view.cache.is_none());
    }

    #[test]
    fn glyphs_map_to_distinct_shapes() {
        assert_eq!(marker_shape(MarkerGlyph::TriangleUp), MarkerShape::Up);
        assert_eq!(marker_shape(MarkerGlyph::TriangleDown), MarkerShape::Down);
    }
}

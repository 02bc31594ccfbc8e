//! Projection of a [`BacktestResult`] into the three dashboard panels.

use crate::config::PLOT_CONFIG;
use crate::config::plot::PanelGeometry;
use crate::domain::BacktestResult;

use super::series::{
    ChartPanel, DisplayMode, LineDash, LineStyle, MarkerGlyph, MarkerStyle, PanelLayout,
    RenderedPanels, SeriesSpec, SummaryPanel,
};

pub const PRICE_TITLE: &str = "Price Chart";
pub const EQUITY_TITLE: &str = "Equity Curve";
pub const SUMMARY_TITLE: &str = "Summary";

/// Pure: the same result and ticker always give the same panels.
pub fn render_panels(result: &BacktestResult, ticker: &str) -> RenderedPanels {
    RenderedPanels {
        price: price_panel(result, ticker),
        equity: equity_panel(result),
        summary: summary_panel(result),
    }
}

pub fn price_panel(result: &BacktestResult, ticker: &str) -> ChartPanel {
    let colors = &PLOT_CONFIG.colors;

    let series = vec![
        line_series(
            "Close",
            &result.dates,
            &result.close,
            LineStyle {
                color: colors.close,
                width: PLOT_CONFIG.close_line_width,
                dash: LineDash::Solid,
            },
        ),
        line_series(
            "SMA Short",
            &result.dates,
            &result.sma_short,
            LineStyle {
                color: colors.sma_short,
                width: PLOT_CONFIG.sma_line_width,
                dash: LineDash::Dash,
            },
        ),
        line_series(
            "SMA Long",
            &result.dates,
            &result.sma_long,
            LineStyle {
                color: colors.sma_long,
                width: PLOT_CONFIG.sma_line_width,
                dash: LineDash::Dash,
            },
        ),
        marker_series(
            "Buy",
            &result.buy_dates,
            &result.buy_prices,
            MarkerStyle {
                glyph: MarkerGlyph::TriangleUp,
                size: PLOT_CONFIG.trade_marker_size,
                color: colors.buy,
            },
        ),
        marker_series(
            "Sell",
            &result.sell_dates,
            &result.sell_prices,
            MarkerStyle {
                glyph: MarkerGlyph::TriangleDown,
                size: PLOT_CONFIG.trade_marker_size,
                color: colors.sell,
            },
        ),
    ];

    let ticker = ticker.trim().to_uppercase();
    let title = if ticker.is_empty() {
        PRICE_TITLE.to_string()
    } else {
        format!("{} — {}", PRICE_TITLE, ticker)
    };

    ChartPanel {
        title,
        series,
        layout: layout(&PLOT_CONFIG.price_panel),
    }
}

pub fn equity_panel(result: &BacktestResult) -> ChartPanel {
    let equity = SeriesSpec {
        name: "Equity".to_string(),
        x: result.eq_dates.clone(),
        y: result.equity.clone(),
        mode: DisplayMode::LinesMarkers,
        line: Some(LineStyle {
            color: PLOT_CONFIG.colors.equity,
            width: PLOT_CONFIG.equity_line_width,
            dash: LineDash::Solid,
        }),
        marker: Some(MarkerStyle {
            glyph: MarkerGlyph::Circle,
            size: PLOT_CONFIG.equity_marker_size,
            color: PLOT_CONFIG.colors.equity,
        }),
    };

    ChartPanel {
        title: EQUITY_TITLE.to_string(),
        series: vec![equity],
        layout: layout(&PLOT_CONFIG.equity_panel),
    }
}

/// Two-space indented JSON of the summary map, keys in backend order.
pub fn summary_panel(result: &BacktestResult) -> SummaryPanel {
    // A Map<String, Value> always serializes, but don't panic over it.
    let text = serde_json::to_string_pretty(&result.summary)
        .unwrap_or_else(|e| format!("<unrenderable summary: {}>", e));

    SummaryPanel {
        title: SUMMARY_TITLE.to_string(),
        text,
    }
}

fn line_series(name: &str, x: &[String], y: &[f64], line: LineStyle) -> SeriesSpec {
    SeriesSpec {
        name: name.to_string(),
        x: x.to_vec(),
        y: y.to_vec(),
        mode: DisplayMode::Lines,
        line: Some(line),
        marker: None,
    }
}

fn marker_series(name: &str, x: &[String], y: &[f64], marker: MarkerStyle) -> SeriesSpec {
    SeriesSpec {
        name: name.to_string(),
        x: x.to_vec(),
        y: y.to_vec(),
        mode: DisplayMode::Markers,
        line: None,
        marker: Some(marker),
    }
}

fn layout(geometry: &PanelGeometry) -> PanelLayout {
    PanelLayout {
        height: geometry.height,
        autosize: true,
        margin: geometry.margin,
        responsive: true,
    }
}

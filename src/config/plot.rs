//! Chart styling and layout configuration.
//!
//! Colours are plain RGB so the render descriptors stay independent of the
//! GUI toolkit; the egui layer converts them when drawing.

use crate::render::{Margins, Rgb};

pub struct SeriesColors {
    pub close: Rgb,
    pub sma_short: Rgb,
    pub sma_long: Rgb,
    pub buy: Rgb,
    pub sell: Rgb,
    pub equity: Rgb,
}

pub struct PanelGeometry {
    pub height: f32,
    pub margin: Margins,
}

pub struct PlotConfig {
    pub colors: SeriesColors,
    /// Width of the close price line
    pub close_line_width: f32,
    /// Width of both SMA overlay lines
    pub sma_line_width: f32,
    /// Width of the equity curve
    pub equity_line_width: f32,
    /// Buy/sell marker size (diameter, in points)
    pub trade_marker_size: f32,
    /// Marker size on the equity curve
    pub equity_marker_size: f32,
    pub price_panel: PanelGeometry,
    pub equity_panel: PanelGeometry,
    /// Date format the backend uses for every date string
    pub date_format: &'static str,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    colors: SeriesColors {
        close: Rgb(0x3b, 0x82, 0xf6),     // Blue
        sma_short: Rgb(0xf5, 0x9e, 0x0b), // Amber
        sma_long: Rgb(0xef, 0x44, 0x44),  // Red
        buy: Rgb(0x10, 0xb9, 0x81),       // Emerald
        sell: Rgb(0xef, 0x44, 0x44),      // Red
        equity: Rgb(0x8b, 0x5c, 0xf6),    // Violet
    },
    close_line_width: 2.0,
    sma_line_width: 1.5,
    equity_line_width: 3.0,
    trade_marker_size: 12.0,
    equity_marker_size: 6.0,
    price_panel: PanelGeometry {
        height: 450.0,
        margin: Margins {
            left: 50.0,
            right: 40.0,
            top: 40.0,
            bottom: 50.0,
        },
    },
    equity_panel: PanelGeometry {
        height: 350.0,
        margin: Margins {
            left: 50.0,
            right: 40.0,
            top: 30.0,
            bottom: 50.0,
        },
    },
    date_format: "%Y-%m-%d",
};

//! Result renderer: turns a backtest result into chart and summary
//! descriptors. Owns construction only; drawing lives in `ui`.

pub mod cache;
pub mod panels;
pub mod series;

pub use cache::PanelCache;
pub use panels::render_panels;
pub use series::{
    ChartPanel, DisplayMode, LineDash, LineStyle, Margins, MarkerGlyph, MarkerStyle, PanelLayout,
    RenderedPanels, Rgb, SeriesSpec, SummaryPanel,
};

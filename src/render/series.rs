//! Declarative chart descriptors.
//!
//! These describe *what* to draw. The egui layer (or anything else that reads
//! the JSON form) decides how.

use serde::{Serialize, Serializer};
use strum_macros::Display;

/// An sRGB colour, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum DisplayMode {
    #[serde(rename = "lines")]
    #[strum(serialize = "lines")]
    Lines,
    #[serde(rename = "markers")]
    #[strum(serialize = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    #[strum(serialize = "lines+markers")]
    LinesMarkers,
}

impl DisplayMode {
    pub fn draws_line(self) -> bool {
        matches!(self, DisplayMode::Lines | DisplayMode::LinesMarkers)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, DisplayMode::Markers | DisplayMode::LinesMarkers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerGlyph {
    Circle,
    TriangleUp,
    TriangleDown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f32,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    #[serde(rename = "symbol")]
    pub glyph: MarkerGlyph,
    pub size: f32,
    pub color: Rgb,
}

/// One series: x/y values plus how to show them.
///
/// `x` and `y` are copied verbatim from the result. Nothing is padded,
/// truncated or invented when their lengths differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: DisplayMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

impl SeriesSpec {
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// x/y pairs that exist on both sides.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.x.iter().map(String::as_str).zip(self.y.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    #[serde(rename = "l")]
    pub left: f32,
    #[serde(rename = "r")]
    pub right: f32,
    #[serde(rename = "t")]
    pub top: f32,
    #[serde(rename = "b")]
    pub bottom: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    pub height: f32,
    pub autosize: bool,
    pub margin: Margins,
    /// Follow the container's width on resize
    pub responsive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,
    pub series: Vec<SeriesSpec>,
    pub layout: PanelLayout,
}

impl ChartPanel {
    pub fn series_named(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub title: String,
    pub text: String,
}

/// Everything the view needs to draw one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPanels {
    pub price: ChartPanel,
    pub equity: ChartPanel,
    pub summary: SummaryPanel,
}

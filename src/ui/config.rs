use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub card: Color32,
    pub summary_background: Color32,
    pub error_background: Color32,
    pub error_text: Color32,
    pub placeholder: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub input_width: f32,
    pub card_corner_radius: u8,
    pub card_padding: i8,
    pub panel_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(196, 181, 253), // Lavender
        central_panel: Color32::from_rgb(40, 32, 64),
        top_panel: Color32::from_rgb(76, 29, 149), // Deep violet
        card: Color32::from_rgb(28, 28, 36),
        summary_background: Color32::from_rgb(20, 20, 26),
        error_background: Color32::from_rgb(254, 226, 226),
        error_text: Color32::from_rgb(153, 27, 27),
        placeholder: Color32::from_gray(220),
    },
    input_width: 160.0,
    card_corner_radius: 12,
    card_padding: 16,
    panel_spacing: 24.0,
};

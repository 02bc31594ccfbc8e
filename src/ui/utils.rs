use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, Ui, Visuals};

use crate::render::{Margins, Rgb};
use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// The white-ish rounded box each panel sits in.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .corner_radius(CornerRadius::same(UI_CONFIG.card_corner_radius))
        .inner_margin(Margin::same(UI_CONFIG.card_padding))
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Chart margins are small whole numbers of points; egui stores them as i8.
pub fn to_margin(margins: Margins) -> Margin {
    fn clamp(v: f32) -> i8 {
        v.round().clamp(0.0, i8::MAX as f32) as i8
    }
    Margin {
        left: clamp(margins.left),
        right: clamp(margins.right),
        top: clamp(margins.top),
        bottom: clamp(margins.bottom),
    }
}

/// Formats a price with enough precision for equities.
pub fn format_price(price: f64) -> String {
    if price.abs() >= 1000.0 {
        format!("${:.2}", price)
    } else {
        format!("${:.4}", price)
    }
}

use eframe::egui::{Color32, RichText, Ui};
use crate::ui::config::UI_CONFIG;

/// Named text styles for the dashboard, so panels don't pick colours ad hoc.
pub trait UiStyleExt {
    /// Small muted text: input captions, status line.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// `Label: value`, value in its own colour.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    fn label_header(&mut self, text: impl Into<String>);

    /// Card title above a chart or the summary.
    fn label_subheader(&mut self, text: impl Into<String>);

    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().monospace().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(16.0)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.error_text));
    }
}

use eframe::egui::{RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders the small, subdued footer tip text.
    fn label_tip(&mut self, text: impl Into<String>);

    /// Renders a success/confirmation message.
    fn label_info(&mut self, text: impl Into<String>);

    /// Renders an error message.
    fn label_error(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_tip(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.tip));
    }

    fn label_info(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.status_info));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.status_error));
    }
}

use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up the blush visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    // Blush panels with white cards
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;

    // Dark grey text, muted rose buttons
    visuals.override_text_color = Some(UI_CONFIG.colors.text);
    visuals.widgets.inactive.weak_bg_fill = UI_CONFIG.colors.button;
    visuals.widgets.hovered.weak_bg_fill = UI_CONFIG.colors.button_hover;
    visuals.widgets.active.weak_bg_fill = UI_CONFIG.colors.button_hover;

    ctx.set_visuals(visuals);
}

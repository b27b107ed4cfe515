use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming (blush + white)
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub text: Color32,
    pub button: Color32,
    pub button_hover: Color32,
    pub tip: Color32,
    pub status_info: Color32,
    pub status_error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub grid_columns: usize,
    pub card_min_width: f32,
    pub window_size: [f32; 2],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(247, 221, 229), // soft blush
        card: Color32::WHITE,
        text: Color32::from_rgb(51, 51, 51),
        button: Color32::from_rgb(233, 195, 207), // muted rose
        button_hover: Color32::from_rgb(244, 191, 207),
        tip: Color32::from_rgb(102, 102, 102),
        status_info: Color32::from_rgb(70, 130, 90),
        status_error: Color32::from_rgb(190, 60, 60),
    },
    grid_columns: 2,
    card_min_width: 340.0,
    window_size: [780.0, 680.0],
};

use eframe::egui::{Align, CornerRadius, Frame, Layout, Margin, RichText, Ui};

use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Header row: the title plus the whole-outfit actions
pub struct HeaderPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    ShuffleOutfit,
    ClearLocks,
    CopyLook,
    SaveLook,
}

impl Panel for HeaderPanel {
    type Event = HeaderEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<HeaderEvent> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label(RichText::new(UI_TEXT.app_title).size(20.0).strong());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Right-to-left layout, so buttons are declared in reverse
                if ui.button(UI_TEXT.save_button).clicked() {
                    events.push(HeaderEvent::SaveLook);
                }
                if ui.button(UI_TEXT.copy_button).clicked() {
                    events.push(HeaderEvent::CopyLook);
                }
                if ui.button(UI_TEXT.clear_locks_button).clicked() {
                    events.push(HeaderEvent::ClearLocks);
                }
                if ui.button(UI_TEXT.shuffle_all_button).clicked() {
                    events.push(HeaderEvent::ShuffleOutfit);
                }
            });
        });
        events
    }
}

/// One category card: the displayed value plus its own reshuffle button
/// and lock checkbox.
pub struct CategoryCard<'a> {
    category: &'a str,
    label: String,
    display_text: String,
    lock_checked: &'a mut bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryEvent {
    Reshuffle(String),
    /// The checkbox changed; `desired` is the widget state, which the app
    /// reconciles against the store rather than toggling blindly.
    LockToggled { category: String, desired: bool },
}

impl<'a> CategoryCard<'a> {
    pub fn new(
        category: &'a str,
        label: String,
        display_text: String,
        lock_checked: &'a mut bool,
    ) -> Self {
        Self {
            category,
            label,
            display_text,
            lock_checked,
        }
    }
}

impl<'a> Panel for CategoryCard<'a> {
    type Event = CategoryEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<CategoryEvent> {
        let mut events = Vec::new();
        Frame::new()
            .fill(UI_CONFIG.colors.card)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(UI_CONFIG.card_min_width);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&self.label).strong());
                });
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&self.display_text).size(15.0));
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.reshuffle_button).clicked() {
                        events.push(CategoryEvent::Reshuffle(self.category.to_string()));
                    }
                    if ui.checkbox(self.lock_checked, UI_TEXT.lock_checkbox).changed() {
                        events.push(CategoryEvent::LockToggled {
                            category: self.category.to_string(),
                            desired: *self.lock_checked,
                        });
                    }
                });
            });
        events
    }
}

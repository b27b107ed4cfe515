use eframe::egui::{CentralPanel, Context, Frame, Grid, Margin, ScrollArea, TopBottomPanel};

use crate::domain::category_label;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{CategoryCard, CategoryEvent, HeaderEvent, HeaderPanel, Panel};

use super::app::{StatusKind, StyleShufflerApp};

impl StyleShufflerApp {
    pub(super) fn render_header(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(12));

        let mut events = Vec::new();
        TopBottomPanel::top("header").frame(header_frame).show(ctx, |ui| {
            events = HeaderPanel.render(ui);
        });

        for event in events {
            self.apply_header_event(event);
        }
    }

    fn apply_header_event(&mut self, event: HeaderEvent) {
        match event {
            HeaderEvent::ShuffleOutfit => self.store.shuffle_all(),
            HeaderEvent::ClearLocks => self.handle_clear_locks(),
            HeaderEvent::CopyLook => self.handle_copy_look(),
            HeaderEvent::SaveLook => self.handle_save_look(),
        }
    }

    pub(super) fn render_category_grid(&mut self, ctx: &Context) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(12));

        let names: Vec<String> = self
            .store
            .wardrobe()
            .category_names()
            .map(String::from)
            .collect();

        CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            let mut events = Vec::new();

            ScrollArea::vertical().id_salt("category_grid").show(ui, |ui| {
                Grid::new("categories")
                    .num_columns(UI_CONFIG.grid_columns)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        for (i, name) in names.iter().enumerate() {
                            let label = category_label(name);
                            let display = self.display_text(name);
                            let checked =
                                self.lock_checkboxes.entry(name.clone()).or_insert(false);

                            let mut card = CategoryCard::new(name, label, display, checked);
                            events.extend(card.render(ui));

                            if (i + 1) % UI_CONFIG.grid_columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });

            for event in events {
                self.apply_category_event(event);
            }
        });
    }

    fn apply_category_event(&mut self, event: CategoryEvent) {
        match event {
            CategoryEvent::Reshuffle(category) => self.store.reshuffle(&category),
            CategoryEvent::LockToggled { category, desired } => {
                self.handle_toggle_lock(&category, desired)
            }
        }
    }

    pub(super) fn render_footer(&mut self, ctx: &Context) {
        let footer_frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(8));

        TopBottomPanel::bottom("footer").frame(footer_frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label_tip(UI_TEXT.footer_tip);

                if let Some(status) = &self.status {
                    ui.separator();
                    match status.kind {
                        StatusKind::Info => ui.label_info(status.text.clone()),
                        StatusKind::Error => ui.label_error(status.text.clone()),
                    }
                }
            });
        });
    }
}

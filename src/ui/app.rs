use eframe::{Frame, egui};
use std::collections::HashMap;

use crate::config::looks_csv_path;
use crate::domain::{Look, StyleStore};
use crate::export;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::local_now_formatted;

/// Tone of the footer status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Outcome of the last save/copy action, shown in the footer
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct StyleShufflerApp {
    pub(super) store: StyleStore,
    // Widget-side lock state. The checkboxes can drift from the store
    // after programmatic resets, so toggles go through a reconciliation
    // check instead of flipping the store blindly.
    pub(super) lock_checkboxes: HashMap<String, bool>,
    pub(super) status: Option<StatusMessage>,
}

impl StyleShufflerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, store: StyleStore) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self::with_store(store)
    }

    /// Construction minus the egui context, so tests can drive the app
    /// logic without a window.
    pub(crate) fn with_store(mut store: StyleStore) -> Self {
        // Never start all-empty
        store.shuffle_all();

        let lock_checkboxes = store
            .wardrobe()
            .category_names()
            .map(|name| (name.to_string(), false))
            .collect();

        Self {
            store,
            lock_checkboxes,
            status: None,
        }
    }

    /// The one mapping from Selection state to card text: the current
    /// value (or the placeholder), prefixed with the lock glyph when
    /// the category is locked.
    pub(super) fn display_text(&self, category: &str) -> String {
        let value = self.store.value(category).unwrap_or(UI_TEXT.no_selection);
        if self.store.is_locked(category) {
            format!("{} {}", UI_TEXT.lock_glyph, value)
        } else {
            value.to_string()
        }
    }

    pub(super) fn current_look(&self) -> Look {
        Look::new(local_now_formatted(), self.store.snapshot())
    }

    pub(super) fn handle_toggle_lock(&mut self, category: &str, desired: bool) {
        if desired != self.store.is_locked(category) {
            let now_locked = self.store.toggle_lock(category);
            log::info!("Lock for {category}: {now_locked}");
        }
    }

    pub(super) fn handle_clear_locks(&mut self) {
        self.store.clear_locks();
        for checked in self.lock_checkboxes.values_mut() {
            *checked = false;
        }
    }

    pub(super) fn handle_save_look(&mut self) {
        let path = looks_csv_path();
        let look = self.current_look();
        match export::append_look(&path, &look) {
            Ok(()) => {
                log::info!("Look saved to {}", path.display());
                self.status = Some(StatusMessage::info(format!(
                    "{}{}",
                    UI_TEXT.saved_status_prefix,
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("Saving look failed: {e:#}");
                self.status = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }

    pub(super) fn handle_copy_look(&mut self) {
        let look = self.current_look();
        match export::copy_look(&look) {
            Ok(()) => {
                log::info!("Look copied to clipboard");
                self.status = Some(StatusMessage::info(UI_TEXT.copied_status));
            }
            Err(e) => {
                log::error!("Copying look failed: {e:#}");
                self.status = Some(StatusMessage::error(format!("{e:#}")));
            }
        }
    }
}

impl eframe::App for StyleShufflerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.render_header(ctx);
        self.render_footer(ctx);
        self.render_category_grid(ctx);
    }
}

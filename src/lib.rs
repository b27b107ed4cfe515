// Core modules
pub mod config;
pub mod domain;
pub mod export;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{Look, Selection, StyleStore, Wardrobe};
pub use ui::StyleShufflerApp;

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, wardrobe: Wardrobe) -> Box<dyn eframe::App> {
    let store = StyleStore::new(wardrobe);
    Box::new(ui::StyleShufflerApp::new(cc, store))
}

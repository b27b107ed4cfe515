#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;

use style_shuffler::config::default_wardrobe;
use style_shuffler::run_app;
use style_shuffler::ui::UI_CONFIG;

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Static wardrobe data
    let wardrobe = default_wardrobe();
    log::info!("Loaded wardrobe with {} categories", wardrobe.len());

    // C. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(UI_CONFIG.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Style Shuffler — Blush Edition",
        options,
        Box::new(move |cc| Ok(run_app(cc, wardrobe))),
    )
}

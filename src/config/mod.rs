//! Configuration module for the style shuffler application.

pub mod persistence;
pub mod wardrobe;

// Re-export commonly used items
pub use persistence::{EXPORTS_DIR, LOOKS_CSV_FILENAME, looks_csv_path};
pub use wardrobe::default_wardrobe;

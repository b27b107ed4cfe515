// Domain types and the outfit state store
pub mod look;
pub mod selection;
pub mod store;
pub mod wardrobe;

// Re-export commonly used types
pub use look::Look;
pub use selection::Selection;
pub use store::StyleStore;
pub use wardrobe::{CategorySlot, Wardrobe, category_label};

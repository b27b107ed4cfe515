//! The built-in wardrobe: every category with its option list.
//!
//! This is startup data, not runtime configuration; edit the lists here
//! to customise the items.

use crate::domain::{CategorySlot, Wardrobe};

/// Build the default category/option table, in display order.
pub fn default_wardrobe() -> Wardrobe {
    Wardrobe::new(vec![
        CategorySlot::new(
            "tops",
            &[
                "White tee",
                "Black tank",
                "Denim shirt",
                "Silk cami",
                "Graphic tee",
                "Cropped hoodie",
                "Button-up",
                "Mesh long-sleeve",
            ],
        ),
        CategorySlot::new(
            "bottoms",
            &[
                "Blue jeans",
                "Black wide-leg",
                "Denim skirt",
                "Pleated mini",
                "Cargo pants",
                "Tailored trousers",
                "Satin slip skirt",
            ],
        ),
        CategorySlot::new(
            "shoes",
            &[
                "White sneakers",
                "Black boots",
                "Strappy heels",
                "Loafers",
                "Platform sandals",
                "Ballet flats",
            ],
        ),
        CategorySlot::new(
            "accessories",
            &[
                "Gold hoops",
                "Silver chain",
                "Baseball cap",
                "Mini baguette bag",
                "Crossbody bag",
                "Sunglasses",
                "Hair ribbon",
            ],
        ),
        CategorySlot::new(
            "colour_palette",
            &[
                "Monochrome",
                "Neon pop",
                "Earth tones",
                "Pastels",
                "Warm metallics",
                "Cool minimal",
                "Jewel tones",
            ],
        ),
        CategorySlot::new(
            "weather",
            &[
                "Hot & sunny",
                "Warm",
                "Mild",
                "Windy",
                "Cool",
                "Cold",
                "Rainy",
                "Stormy",
            ],
        ),
        CategorySlot::new(
            "activity",
            &[
                "Uni day",
                "Office casual",
                "Date night",
                "Festival",
                "Beach walk",
                "Gym to brunch",
                "Dinner with friends",
                "Errands",
            ],
        ),
    ])
}

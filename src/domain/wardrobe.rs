/// A named slot (e.g. "shoes") with its fixed list of selectable options.
#[derive(Debug, Clone)]
pub struct CategorySlot {
    pub name: String,
    pub options: Vec<String>,
}

impl CategorySlot {
    pub fn new(name: impl Into<String>, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The full set of categories in the fixed order shared by the UI grid,
/// the clipboard rendering and the export log columns.
///
/// Built once at startup and passed into the store; never mutated after.
#[derive(Debug, Clone, Default)]
pub struct Wardrobe {
    slots: Vec<CategorySlot>,
}

impl Wardrobe {
    pub fn new(slots: Vec<CategorySlot>) -> Self {
        Self { slots }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    /// Option list for a category, `None` if the category is unknown.
    pub fn options(&self, category: &str) -> Option<&[String]> {
        self.slots
            .iter()
            .find(|slot| slot.name == category)
            .map(|slot| slot.options.as_slice())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Human-readable label for a category identifier.
/// Underscores become spaces and only the first letter is capitalized,
/// e.g. "colour_palette" -> "Colour palette".
pub fn category_label(name: &str) -> String {
    let spaced = name.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

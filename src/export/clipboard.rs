use anyhow::{Context, Result};
use itertools::Itertools;

use crate::domain::{Look, category_label};

/// Placeholder for a category with no current pick in the copied text.
pub const CLIPBOARD_PLACEHOLDER: &str = "—";

/// One "<Label>: <value>" line per category, in wardrobe order.
pub fn format_look_text(look: &Look) -> String {
    look.entries()
        .iter()
        .map(|(name, value)| {
            format!(
                "{}: {}",
                category_label(name),
                value.as_deref().unwrap_or(CLIPBOARD_PLACEHOLDER)
            )
        })
        .join("\n")
}

/// Replace the system clipboard contents with the rendered look.
pub fn copy_look(look: &Look) -> Result<()> {
    let text = format_look_text(look);
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write the look to the clipboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_labeled_line_per_category_in_order() {
        let look = Look::new(
            "2026-08-27 10:00:00".to_string(),
            vec![
                ("tops".to_string(), Some("Silk cami".to_string())),
                ("colour_palette".to_string(), Some("Pastels".to_string())),
                ("shoes".to_string(), None),
            ],
        );

        assert_eq!(
            format_look_text(&look),
            "Tops: Silk cami\nColour palette: Pastels\nShoes: —"
        );
    }
}

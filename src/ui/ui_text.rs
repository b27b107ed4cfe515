/// Static UI strings, kept in one place so buttons, cards and status
/// messages stay consistent.
pub struct UiText {
    pub app_title: &'static str,
    pub shuffle_all_button: &'static str,
    pub clear_locks_button: &'static str,
    pub copy_button: &'static str,
    pub save_button: &'static str,
    pub reshuffle_button: &'static str,
    pub lock_checkbox: &'static str,
    pub no_selection: &'static str,
    pub lock_glyph: &'static str,
    pub footer_tip: &'static str,
    pub saved_status_prefix: &'static str,
    pub copied_status: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Style Shuffler",
    shuffle_all_button: "Shuffle Outfit",
    clear_locks_button: "Clear Locks",
    copy_button: "Copy Look",
    save_button: "Save Look",
    reshuffle_button: "Reshuffle",
    lock_checkbox: "Lock",
    no_selection: "(no option)",
    lock_glyph: "🔒",
    footer_tip: "Tip: Edit the wardrobe lists in config to customise items.",
    saved_status_prefix: "Look saved to ",
    copied_status: "Current look copied to clipboard.",
};

use std::collections::HashMap;

use rand::seq::SliceRandom;

use super::selection::Selection;
use super::wardrobe::Wardrobe;

/// Single source of truth for category options and current picks.
///
/// Owns every `Selection`; the UI only reads from it and routes user
/// intents back through these operations.
pub struct StyleStore {
    wardrobe: Wardrobe,
    state: HashMap<String, Selection>,
}

impl StyleStore {
    pub fn new(wardrobe: Wardrobe) -> Self {
        let state = wardrobe
            .category_names()
            .map(|name| (name.to_string(), Selection::default()))
            .collect();
        Self { wardrobe, state }
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    /// Uniform pick from a category's option list.
    /// `None` for an unknown or empty category rather than a panic.
    pub fn random_pick(&self, category: &str) -> Option<String> {
        let options = self.wardrobe.options(category)?;
        options.choose(&mut rand::thread_rng()).cloned()
    }

    /// Re-pick one category's value; locked categories are left alone.
    pub fn reshuffle(&mut self, category: &str) {
        if self.is_locked(category) {
            return;
        }
        let pick = self.random_pick(category);
        if let Some(selection) = self.state.get_mut(category) {
            selection.value = pick;
        }
    }

    /// Reshuffle every category in wardrobe order. Each category is
    /// independent: locked ones are skipped, not the whole pass.
    pub fn shuffle_all(&mut self) {
        let names: Vec<String> = self.wardrobe.category_names().map(String::from).collect();
        for name in &names {
            self.reshuffle(name);
        }
    }

    /// Flip a category's lock flag and return the new state.
    /// The current value is untouched.
    pub fn toggle_lock(&mut self, category: &str) -> bool {
        match self.state.get_mut(category) {
            Some(selection) => {
                selection.locked = !selection.locked;
                selection.locked
            }
            None => false,
        }
    }

    /// Unlock every category, leaving values as they are.
    pub fn clear_locks(&mut self) {
        for selection in self.state.values_mut() {
            selection.locked = false;
        }
    }

    pub fn is_locked(&self, category: &str) -> bool {
        self.state
            .get(category)
            .map(|selection| selection.locked)
            .unwrap_or(false)
    }

    pub fn value(&self, category: &str) -> Option<&str> {
        self.state
            .get(category)
            .and_then(|selection| selection.value.as_deref())
    }

    /// Category -> current value for every category, in wardrobe order.
    /// Pure read; this is what gets exported and copied.
    pub fn snapshot(&self) -> Vec<(String, Option<String>)> {
        self.wardrobe
            .category_names()
            .map(|name| {
                (
                    name.to_string(),
                    self.state.get(name).and_then(|s| s.value.clone()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wardrobe::CategorySlot;

    fn test_wardrobe() -> Wardrobe {
        Wardrobe::new(vec![
            CategorySlot::new("tops", &["White tee", "Black tank", "Denim shirt"]),
            CategorySlot::new("bottoms", &["Blue jeans", "Denim skirt"]),
            CategorySlot::new("shoes", &["Loafers"]),
        ])
    }

    #[test]
    fn reshuffle_picks_a_member_of_the_option_list() {
        let mut store = StyleStore::new(test_wardrobe());
        store.reshuffle("tops");
        let value = store.value("tops").expect("tops should have a value");
        assert!(store.wardrobe().options("tops").unwrap().iter().any(|o| o == value));
    }

    #[test]
    fn reshuffle_skips_locked_categories() {
        let mut store = StyleStore::new(test_wardrobe());
        store.shuffle_all();
        let before = store.value("tops").unwrap().to_string();
        assert!(store.toggle_lock("tops"));
        for _ in 0..20 {
            store.reshuffle("tops");
        }
        assert_eq!(store.value("tops"), Some(before.as_str()));
    }

    #[test]
    fn shuffle_all_fills_every_unlocked_category() {
        let mut store = StyleStore::new(test_wardrobe());
        store.shuffle_all();
        for (name, value) in store.snapshot() {
            let value = value.expect("every category has options");
            assert!(store.wardrobe().options(&name).unwrap().iter().any(|o| *o == value));
        }
    }

    #[test]
    fn shuffle_all_freezes_locked_and_repicks_the_rest() {
        // Single-element lists force the picks, so the outcome is exact.
        let mut store = StyleStore::new(Wardrobe::new(vec![
            CategorySlot::new("tops", &["A"]),
            CategorySlot::new("bottoms", &["B"]),
        ]));
        store.shuffle_all();
        assert_eq!(
            store.snapshot(),
            vec![
                ("tops".to_string(), Some("A".to_string())),
                ("bottoms".to_string(), Some("B".to_string())),
            ]
        );

        store.toggle_lock("tops");
        store.shuffle_all();
        assert_eq!(
            store.snapshot(),
            vec![
                ("tops".to_string(), Some("A".to_string())),
                ("bottoms".to_string(), Some("B".to_string())),
            ]
        );
    }

    #[test]
    fn toggle_lock_twice_restores_the_flag_and_keeps_the_value() {
        let mut store = StyleStore::new(test_wardrobe());
        store.shuffle_all();
        let before = store.value("bottoms").map(String::from);

        assert!(store.toggle_lock("bottoms"));
        assert!(!store.toggle_lock("bottoms"));
        assert!(!store.is_locked("bottoms"));
        assert_eq!(store.value("bottoms"), before.as_deref());
    }

    #[test]
    fn clear_locks_unlocks_everything_without_touching_values() {
        let mut store = StyleStore::new(test_wardrobe());
        store.shuffle_all();
        store.toggle_lock("tops");
        store.toggle_lock("shoes");
        let before = store.snapshot();

        store.clear_locks();
        for name in ["tops", "bottoms", "shoes"] {
            assert!(!store.is_locked(name));
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn empty_or_unknown_categories_never_panic() {
        let mut store = StyleStore::new(Wardrobe::new(vec![CategorySlot::new("tops", &[])]));
        assert_eq!(store.random_pick("tops"), None);
        store.reshuffle("tops");
        assert_eq!(store.value("tops"), None);

        assert_eq!(store.random_pick("hats"), None);
        store.reshuffle("hats");
        assert!(!store.toggle_lock("hats"));
        assert!(!store.is_locked("hats"));
    }

    #[test]
    fn snapshot_follows_wardrobe_order() {
        let store = StyleStore::new(test_wardrobe());
        let names: Vec<String> = store.snapshot().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["tops", "bottoms", "shoes"]);
    }
}

/// A full snapshot of every category's value at one point in time.
///
/// Immutable once taken; the export log and the clipboard both render
/// from this record, never from live store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Look {
    timestamp: String,
    entries: Vec<(String, Option<String>)>,
}

impl Look {
    pub fn new(timestamp: String, entries: Vec<(String, Option<String>)>) -> Self {
        Self { timestamp, entries }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// (category, value) pairs in wardrobe order.
    pub fn entries(&self) -> &[(String, Option<String>)] {
        &self.entries
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

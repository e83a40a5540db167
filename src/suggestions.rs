use crate::model::Entry;
use crate::store::{Store, StoreError};
use std::collections::HashMap;

/// Label → value mapping shown in the menu.
///
/// Labels keep the position of their first insertion; inserting an existing
/// label again replaces its value in place. Since rows arrive ordered by
/// value, colliding labels end up pointing at the greatest value.
#[derive(Debug, Default, Clone)]
pub struct SuggestionMap {
    items: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SuggestionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: String, value: String) {
        if let Some(&i) = self.index.get(&label) {
            self.items[i].1 = value;
        } else {
            self.index.insert(label.clone(), self.items.len());
            self.items.push((label, value));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.index.get(label).map(|&i| self.items[i].1.as_str())
    }

    /// Value for `line` if it is a known label, otherwise `line` itself.
    pub fn resolve(&self, line: &str) -> String {
        self.get(line).unwrap_or(line).to_string()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Builds the three flavours of [`SuggestionMap`] from the store.
pub struct SuggestionIndex<'a> {
    store: &'a Store,
    glyph: &'a str,
}

impl<'a> SuggestionIndex<'a> {
    pub fn new(store: &'a Store, glyph: &'a str) -> Self {
        Self { store, glyph }
    }

    #[allow(dead_code)]
    pub fn history_only(&self) -> Result<SuggestionMap, StoreError> {
        Ok(self.build(self.store.read_partition(false)?))
    }

    pub fn bookmarks_only(&self) -> Result<SuggestionMap, StoreError> {
        Ok(self.build(self.store.read_partition(true)?))
    }

    pub fn merged(&self) -> Result<SuggestionMap, StoreError> {
        Ok(self.build(self.store.read_all()?))
    }

    fn build(&self, entries: Vec<Entry>) -> SuggestionMap {
        let mut map = SuggestionMap::new();
        for entry in entries {
            let label = display_label(&entry, self.glyph);
            map.insert(label, entry.value);
        }
        map
    }
}

/// Bookmarked rows get the glyph prefix; unlabelled rows show their value.
pub fn display_label(entry: &Entry, glyph: &str) -> String {
    let name = entry.label.as_deref().filter(|l| !l.is_empty()).unwrap_or(&entry.value);
    if entry.bookmarked {
        format!("{} {}", glyph, name)
    } else {
        name.to_string()
    }
}

// crates/write_rst_documents/src/collection.rs

use indexmap::IndexMap;

/// Document texts keyed by document name, in insertion order.
///
/// Inserting a name that is already present replaces its text in place.
#[derive(Clone, Debug, Default)]
pub struct DocumentCollection {
    entries: IndexMap<String, String>,
}

impl DocumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding one document.
    pub fn single(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut collection = Self::new();
        collection.insert(name, text);
        collection
    }

    /// Adds `name`, or replaces its text if present. Returns the previous text.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), text.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }
}

impl FromIterator<(String, String)> for DocumentCollection {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

//! Localized-string lookup for ordinance display text.
//!
//! The record is constructed with fallback English text plus a string key
//! per field; when a city binds, the host's string lookup may override the
//! text. A missing table or key leaves the fallback untouched.

use std::collections::BTreeMap;

/// Resource key identifying one localized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringKey {
    pub group: u32,
    pub instance: u32,
}

impl StringKey {
    pub const fn new(group: u32, instance: u32) -> Self {
        Self { group, instance }
    }
}

/// Host-side localized string source.
pub trait StringLookup: Send + Sync {
    /// Resolve a key to its localized text, or `None` when the key is
    /// missing from the active language.
    fn localized(&self, key: StringKey) -> Option<String>;
}

/// Simple in-memory string table keyed by [`StringKey`].
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: BTreeMap<StringKey, String>,
}

impl StringTable {
    pub fn insert(&mut self, key: StringKey, text: impl Into<String>) {
        self.entries.insert(key, text.into());
    }

    pub fn get(&self, key: StringKey) -> Option<&str> {
        self.entries.get(&key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringLookup for StringTable {
    fn localized(&self, key: StringKey) -> Option<String> {
        self.entries.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = StringTable::default();
        table.insert(StringKey::new(0x10, 0x20), "Legalize Gambling");

        assert_eq!(table.get(StringKey::new(0x10, 0x20)), Some("Legalize Gambling"));
        assert_eq!(
            table.localized(StringKey::new(0x10, 0x20)),
            Some("Legalize Gambling".to_string())
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_key_is_none() {
        let table = StringTable::default();
        assert!(table.is_empty());
        assert_eq!(table.localized(StringKey::new(1, 2)), None);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut table = StringTable::default();
        let key = StringKey::new(1, 2);
        table.insert(key, "old");
        table.insert(key, "new");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(key), Some("new"));
    }
}

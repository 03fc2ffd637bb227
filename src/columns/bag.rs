// SPDX-License-Identifier: MPL-2.0
//! Per-file output attributes.

use super::COLUMN_DEFINITIONS;

/// Column name → value pairs collected for one file.
///
/// A bag is created per file, seeded with an empty value for every known
/// column, and then overwritten field by field. Iteration follows the order
/// values were first inserted, which for a seeded bag is registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBag {
    entries: Vec<(String, String)>,
}

impl AttributeBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bag holding `""` for every registered column.
    ///
    /// Hosts render unset attributes as a placeholder, so every column starts
    /// out blank instead.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: COLUMN_DEFINITIONS
                .iter()
                .map(|c| (c.name.to_string(), String::new()))
                .collect(),
        }
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Returns the value stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the pairs whose value is not empty.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    /// Number of attributes in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_bag_is_blank_for_every_column() {
        let bag = AttributeBag::seeded();
        assert_eq!(bag.len(), COLUMN_DEFINITIONS.len());
        assert!(bag.iter().all(|(_, v)| v.is_empty()));
        assert_eq!(bag.non_empty().count(), 0);
    }

    #[test]
    fn seeded_bag_follows_registry_order() {
        let bag = AttributeBag::seeded();
        let names: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        let expected: Vec<_> = COLUMN_DEFINITIONS.iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut bag = AttributeBag::seeded();
        bag.set("title", "Galway");
        bag.set("title", "Galway (remaster)");
        assert_eq!(bag.get("title"), Some("Galway (remaster)"));
        assert_eq!(bag.len(), COLUMN_DEFINITIONS.len());
    }

    #[test]
    fn set_appends_unknown_names() {
        let mut bag = AttributeBag::new();
        assert!(bag.is_empty());
        bag.set("custom", "1");
        assert_eq!(bag.get("custom"), Some("1"));
        assert_eq!(bag.get("missing"), None);
    }
}

#![forbid(unsafe_code)]

//! Item identifiers and selection maps.
//!
//! A [`SelectionMap`] is a set of selected identifiers stored as
//! `identifier -> true` entries; an absent key means "not selected". Maps are
//! rebuilt from scratch on every recomputation and compared with
//! [`mappings_equal`] before being committed, so an unchanged selection never
//! triggers downstream work.

use std::fmt;

use ahash::AHashMap;

/// Stable identifier of a selectable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemId {
    /// Textual identifier (e.g. a data attribute value).
    Name(String),
    /// Numeric identifier.
    Index(u64),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

/// Mapping from item identifier to "selected".
#[derive(Debug, Clone, Default)]
pub struct SelectionMap {
    entries: AHashMap<ItemId, bool>,
}

impl SelectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as selected.
    pub fn select(&mut self, id: ItemId) {
        self.entries.insert(id, true);
    }

    /// Whether `id` is present and mapped to `true`.
    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Raw lookup: `None` when the key is absent.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<bool> {
        self.entries.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, bool)> + '_ {
        self.entries.iter().map(|(id, selected)| (id, *selected))
    }

    /// Identifiers mapped to `true`, sorted.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self
            .entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }
}

impl PartialEq for SelectionMap {
    fn eq(&self, other: &Self) -> bool {
        mappings_equal(self, other)
    }
}

impl FromIterator<ItemId> for SelectionMap {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        let mut map = Self::new();
        for id in iter {
            map.select(id);
        }
        map
    }
}

impl FromIterator<(ItemId, bool)> for SelectionMap {
    fn from_iter<T: IntoIterator<Item = (ItemId, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Shallow equality: same key count and every key of `a` maps to the same
/// value in `b`.
#[must_use]
pub fn mappings_equal(a: &SelectionMap, b: &SelectionMap) -> bool {
    a.entries.len() == b.entries.len()
        && a
            .entries
            .iter()
            .all(|(id, selected)| b.entries.get(id) == Some(selected))
}

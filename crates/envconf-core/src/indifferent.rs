//! Indifferent-access wrapper around a string-keyed settings mapping
//!
//! The original settings files were consumed by a runtime where mappings
//! could be probed with either strings or interned symbols. Here that is an
//! explicit adapter: every key form is normalized to its string form before
//! probing, so `map.get("a")` and `map.get(Sym("a"))` are the same lookup.

use crate::setting::{Setting, scalar_key};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Token-style key, the symbol analogue.
///
/// Carries no semantics of its own; it normalizes to its string form on
/// lookup. Probing with a token that names no entry defers to nothing —
/// entries are only ever stored under string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sym<'a>(pub &'a str);

/// A key form accepted by [`IndifferentMap`] lookups.
///
/// Implemented for `&str`, `String`, and [`Sym`]. All forms normalize to a
/// plain string before the underlying map is probed.
pub trait SettingKey {
    /// The string form used to probe the map.
    fn normalize(&self) -> &str;
}

impl SettingKey for &str {
    fn normalize(&self) -> &str {
        self
    }
}

impl SettingKey for String {
    fn normalize(&self) -> &str {
        self
    }
}

impl SettingKey for Sym<'_> {
    fn normalize(&self) -> &str {
        self.0
    }
}

/// String-keyed mapping of settings with indifferent lookup.
///
/// # Example
///
/// ```
/// use envconf_core::{IndifferentMap, Sym};
///
/// let mut map = IndifferentMap::new();
/// map.insert("a", 1);
/// assert_eq!(map.get("a"), map.get(Sym("a")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndifferentMap {
    entries: BTreeMap<String, Setting>,
}

impl IndifferentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a parsed YAML mapping.
    ///
    /// Keys are stringified; pairs with composite keys (sequences or
    /// mappings used as keys) have no string form and are skipped.
    /// Values are converted deeply, so nested mappings are wrapped too.
    pub fn from_mapping(mapping: serde_yaml::Mapping) -> Self {
        let mut map = Self::new();
        for (key, value) in mapping {
            match scalar_key(&key) {
                Some(name) => {
                    map.insert(name, Setting::from(value));
                }
                None => {
                    tracing::warn!(?key, "skipping entry with non-scalar key");
                }
            }
        }
        map
    }

    /// Insert a setting under its string name. Replaces any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Setting>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a setting by any key form.
    pub fn get(&self, key: impl SettingKey) -> Option<&Setting> {
        self.entries.get(key.normalize())
    }

    /// Remove a setting by any key form, returning it if present.
    pub fn remove(&mut self, key: impl SettingKey) -> Option<Setting> {
        self.entries.remove(key.normalize())
    }

    /// Whether an entry exists under any form of `key`.
    pub fn contains(&self, key: impl SettingKey) -> bool {
        self.entries.contains_key(key.normalize())
    }

    /// Iterate over `(name, setting)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Setting> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for IndifferentMap {
    type Item = (String, Setting);
    type IntoIter = btree_map::IntoIter<String, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a IndifferentMap {
    type Item = (&'a String, &'a Setting);
    type IntoIter = btree_map::Iter<'a, String, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Setting>> FromIterator<(K, V)> for IndifferentMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

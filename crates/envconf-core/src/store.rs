//! Mutable settings registry
//!
//! The original host kept settings in an ambient global registry mutated
//! through `set` calls. Here the store is an explicit value passed into the
//! loader, with last-write-wins semantics on key collision — later files
//! override earlier ones.

use crate::indifferent::{IndifferentMap, SettingKey};
use crate::setting::Setting;
use std::collections::btree_map;

/// Key/value registry that application code reads at runtime.
///
/// # Example
///
/// ```
/// use envconf_core::{SettingsStore, Sym};
///
/// let mut store = SettingsStore::new();
/// store.set("retries", 3);
/// store.set("retries", 5);
/// assert_eq!(store.get(Sym("retries")).unwrap().as_i64(), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    entries: IndifferentMap,
}

impl SettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a setting. An existing entry under the same name is replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Setting>) {
        self.entries.insert(name, value);
    }

    /// Look up a setting by any key form.
    pub fn get(&self, key: impl SettingKey) -> Option<&Setting> {
        self.entries.get(key)
    }

    /// Whether a setting exists under any form of `key`.
    pub fn contains(&self, key: impl SettingKey) -> bool {
        self.entries.contains(key)
    }

    /// Apply every entry of a resolved settings mapping via [`set`].
    ///
    /// Entries replace existing ones with the same name, so merging the
    /// resolutions of several files in order gives the last file the final
    /// word on each key.
    ///
    /// [`set`]: SettingsStore::set
    pub fn merge(&mut self, resolved: IndifferentMap) {
        for (name, value) in resolved {
            self.entries.insert(name, value);
        }
    }

    /// Iterate over `(name, setting)` pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Setting> {
        self.entries.iter()
    }

    /// Number of settings held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no settings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

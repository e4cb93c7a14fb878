//! File-name to icon lookup used by code block headers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exact-match table from a file name or extension to an icon identifier.
///
/// Keys are compared verbatim (case-sensitive, no extension fallback).
/// Inserting an existing key replaces its icon, so duplicate keys resolve
/// last-write-wins both here and when merging configuration layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeIconMap(BTreeMap<String, String>);

impl CodeIconMap {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the icon for `key`, returning the previous icon.
    pub fn insert(&mut self, key: impl Into<String>, icon: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), icon.into())
    }

    /// Resolve the icon for an exact file name or extension.
    ///
    /// Returns `None` for unmatched keys; there is no default icon.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for CodeIconMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, icon) in iter {
            map.insert(key, icon);
        }
        map
    }
}

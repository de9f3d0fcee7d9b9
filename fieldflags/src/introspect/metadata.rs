//! Per-field metadata.

use std::collections::BTreeMap;

/// Metadata keys understood by the binder.
pub mod keys {
    /// Overrides the computed flag name; may list aliases (`"path,p"`).
    pub const NAME: &str = "name";
    /// Help text.
    pub const USAGE: &str = "usage";
    /// Overrides the derived environment variable; `"-"` binds none.
    pub const ENVVAR: &str = "envvar";
    /// `"true"` hides the flag from help output.
    pub const HIDDEN: &str = "hidden";
    /// Default literal, parsed per flag kind.
    pub const VALUE: &str = "value";

    /// Every recognised key.
    pub const ALL: [&str; 5] = [NAME, USAGE, ENVVAR, HIDDEN, VALUE];

    /// Whether `key` is one of [`ALL`].
    #[must_use]
    pub fn is_known(key: &str) -> bool {
        ALL.contains(&key)
    }
}

/// String key/value annotations declared on a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Creates empty metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds metadata from literal pairs; later pairs replace earlier ones.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Sets `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Value of `key`, if declared.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Declared pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Declared keys that the binder does not recognise.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str).filter(|key| !keys::is_known(key))
    }

    /// Number of declared pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

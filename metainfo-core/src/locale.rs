//! Per-locale value tables.

use std::collections::BTreeMap;

use serde::Serialize;

/// Locale tag of the unlocalized (default) entry.
pub const DEFAULT_LOCALE: &str = "C";

/// Pseudo-locale that requests every translation.
pub const ALL_LOCALES: &str = "ALL";

/// A map from locale tag to value, holding at most one value per locale.
///
/// Iteration is ordered by tag, so `"C"` comes before the lowercase
/// language codes and serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleTable<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Default for LocaleTable<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> LocaleTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `locale`, replacing any earlier value.
    pub fn set(&mut self, locale: impl Into<String>, value: T) {
        self.entries.insert(locale.into(), value);
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.entries.get(locale)
    }

    /// Lookup for `locale`, falling back to the `"C"` entry.
    pub fn get_for(&self, locale: &str) -> Option<&T> {
        self.entries
            .get(locale)
            .or_else(|| self.entries.get(DEFAULT_LOCALE))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T: Default> LocaleTable<T> {
    /// Mutable access to the value for `locale`, inserting a default first.
    pub fn entry(&mut self, locale: &str) -> &mut T {
        self.entries.entry(locale.to_string()).or_default()
    }
}

/// The language part of a locale tag: `"de"` for `"de_DE"`.
pub fn locale_short(locale: &str) -> &str {
    locale.split('_').next().unwrap_or(locale)
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::kinds::{ChecksumKind, SizeKind, UrgencyKind};
use crate::locale::{DEFAULT_LOCALE, LocaleTable};

/// A single released version of a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Release {
    pub version: String,
    /// Release time in seconds since the Unix epoch.
    pub timestamp: Option<u64>,
    pub urgency: UrgencyKind,
    /// Download locations, in document order.
    pub locations: Vec<String>,
    pub checksums: BTreeMap<ChecksumKind, String>,
    /// Artifact sizes in bytes. Zero sizes are never stored.
    pub sizes: BTreeMap<SizeKind, u64>,
    pub description: LocaleTable<String>,
    /// Locale used by the convenience accessors.
    #[serde(skip)]
    pub active_locale: String,
}

impl Default for Release {
    fn default() -> Self {
        Self {
            version: String::new(),
            timestamp: None,
            urgency: UrgencyKind::Unknown,
            locations: Vec::new(),
            checksums: BTreeMap::new(),
            sizes: BTreeMap::new(),
            description: LocaleTable::new(),
            active_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn set_checksum(&mut self, kind: ChecksumKind, value: impl Into<String>) {
        self.checksums.insert(kind, value.into());
    }

    pub fn checksum(&self, kind: ChecksumKind) -> Option<&str> {
        self.checksums.get(&kind).map(String::as_str)
    }

    /// Record an artifact size. A size of zero means "unknown" and is ignored.
    pub fn set_size(&mut self, kind: SizeKind, size: u64) {
        if size > 0 {
            self.sizes.insert(kind, size);
        }
    }

    pub fn size(&self, kind: SizeKind) -> Option<u64> {
        self.sizes.get(&kind).copied()
    }

    /// Description markup for the active locale.
    pub fn description(&self) -> Option<&str> {
        self.description
            .get_for(&self.active_locale)
            .map(String::as_str)
    }
}

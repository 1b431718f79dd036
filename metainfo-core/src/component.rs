//! The component: one installable piece of software and everything known about it.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::kinds::{BundleKind, ComponentKind, IconKind, ProvidedKind, UrlKind};
use crate::locale::{DEFAULT_LOCALE, LocaleTable};
use crate::release::Release;
use crate::screenshot::Screenshot;

/// An icon reference. Which string it holds depends on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Icon {
    /// Symbolic name from the icon theme.
    Stock(String),
    /// File name inside the catalog's icon cache.
    Cached(String),
    /// Absolute path on the local filesystem.
    Local(String),
    /// Absolute URL.
    Remote(String),
}

impl Icon {
    pub fn new(kind: IconKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            IconKind::Stock => Self::Stock(value),
            IconKind::Cached => Self::Cached(value),
            IconKind::Local => Self::Local(value),
            IconKind::Remote => Self::Remote(value),
        }
    }

    pub fn kind(&self) -> IconKind {
        match self {
            Self::Stock(_) => IconKind::Stock,
            Self::Cached(_) => IconKind::Cached,
            Self::Local(_) => IconKind::Local,
            Self::Remote(_) => IconKind::Remote,
        }
    }

    /// The stored name, filename or URL.
    pub fn value(&self) -> &str {
        match self {
            Self::Stock(v) | Self::Cached(v) | Self::Local(v) | Self::Remote(v) => v,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Stock(name) => Some(name),
            _ => None,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Cached(file) | Self::Local(file) => Some(file),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) => Some(url),
            _ => None,
        }
    }
}

/// A capability supplied by a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvidedItem {
    pub kind: ProvidedKind,
    pub value: String,
}

impl ProvidedItem {
    pub fn new(kind: ProvidedKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A software component as described by AppStream metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Unique identifier, e.g. `org.gnome.Calculator.desktop`.
    pub id: String,
    pub kind: ComponentKind,
    pub name: LocaleTable<String>,
    pub summary: LocaleTable<String>,
    pub developer_name: LocaleTable<String>,
    /// Description markup (`<p>`, `<ul>`, `<ol>`) per locale.
    pub description: LocaleTable<String>,
    pub project_license: Option<String>,
    pub project_group: Option<String>,
    pub pkgnames: Vec<String>,
    pub source_pkgname: Option<String>,
    /// Ids of components this one augments.
    pub extends: Vec<String>,
    pub compulsory_for_desktops: Vec<String>,
    pub keywords: LocaleTable<Vec<String>>,
    pub categories: Vec<String>,
    pub urls: BTreeMap<UrlKind, String>,
    pub icons: Vec<Icon>,
    pub provided: Vec<ProvidedItem>,
    pub bundles: BTreeMap<BundleKind, String>,
    pub releases: Vec<Release>,
    pub screenshots: Vec<Screenshot>,
    /// Translation coverage: locale → percentage.
    pub languages: BTreeMap<String, u32>,
    /// Provenance tag of the catalog this component came from.
    pub origin: Option<String>,
    /// Tie-breaker between components of the same id from different origins.
    pub priority: i32,
    /// Locale used by the convenience accessors.
    #[serde(skip)]
    pub active_locale: String,
}

impl Default for Component {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: ComponentKind::Generic,
            name: LocaleTable::new(),
            summary: LocaleTable::new(),
            developer_name: LocaleTable::new(),
            description: LocaleTable::new(),
            project_license: None,
            project_group: None,
            pkgnames: Vec::new(),
            source_pkgname: None,
            extends: Vec::new(),
            compulsory_for_desktops: Vec::new(),
            keywords: LocaleTable::new(),
            categories: Vec::new(),
            urls: BTreeMap::new(),
            icons: Vec::new(),
            provided: Vec::new(),
            bundles: BTreeMap::new(),
            releases: Vec::new(),
            screenshots: Vec::new(),
            languages: BTreeMap::new(),
            origin: None,
            priority: 0,
            active_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Component {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// A component needs an id before it can live in a catalog.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn name(&self) -> Option<&str> {
        self.localized(&self.name)
    }

    pub fn summary(&self) -> Option<&str> {
        self.localized(&self.summary)
    }

    pub fn developer_name(&self) -> Option<&str> {
        self.localized(&self.developer_name)
    }

    pub fn description(&self) -> Option<&str> {
        self.localized(&self.description)
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords
            .get_for(&self.active_locale)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn url(&self, kind: UrlKind) -> Option<&str> {
        self.urls.get(&kind).map(String::as_str)
    }

    pub fn bundle_id(&self, kind: BundleKind) -> Option<&str> {
        self.bundles.get(&kind).map(String::as_str)
    }

    pub fn provided_of(&self, kind: ProvidedKind) -> impl Iterator<Item = &str> {
        self.provided
            .iter()
            .filter(move |item| item.kind == kind)
            .map(|item| item.value.as_str())
    }

    pub fn add_provided_item(&mut self, kind: ProvidedKind, value: impl Into<String>) {
        self.provided.push(ProvidedItem::new(kind, value));
    }

    /// Render the component for diagnostics (used in "invalid component" errors).
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }

    fn localized<'a>(&'a self, table: &'a LocaleTable<String>) -> Option<&'a str> {
        table.get_for(&self.active_locale).map(String::as_str)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}::{}]> {}",
            self.kind,
            self.pkgnames.join(","),
            if self.id.is_empty() { "<no id>" } else { &self.id }
        )?;
        if let Some(name) = self.name() {
            write!(f, " name: {name}")?;
        }
        if let Some(summary) = self.summary() {
            write!(f, " summary: {summary}")?;
        }
        if let Some(origin) = &self.origin {
            write!(f, " origin: {origin}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/component_tests.rs"]
mod tests;

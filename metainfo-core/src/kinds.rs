//! Kind enumerations used throughout the component model.
//!
//! Every kind carries its canonical AppStream spelling (`as_str`) and a
//! lookup from string. Lookups never fail loudly: metadata in the wild is
//! full of typos and newer vocabulary, so callers decide whether an
//! unrecognized value is dropped or mapped to an `Unknown` variant.

use serde::Serialize;

/// Shared behaviour of all string-backed kind enums.
pub trait NamedKind: Sized + Copy + 'static {
    /// Short human label used in error messages ("url kind", "bundle kind").
    const LABEL: &'static str;

    /// All variants that have a canonical spelling, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical spelling as it appears in AppStream XML.
    fn as_str(&self) -> &'static str;

    /// Additional accepted spellings (legacy names).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Look up a variant by its canonical spelling or one of its aliases.
    fn from_name(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s || k.aliases().contains(&s))
    }
}

/// Error returned when a string cannot be parsed into a kind enum.
#[derive(Debug, Clone)]
pub struct KindParseError {
    pub label: &'static str,
    pub value: String,
}

impl std::fmt::Display for KindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {}: '{}'", self.label, self.value)
    }
}

impl std::error::Error for KindParseError {}

macro_rules! named_kind_impls {
    ($($kind:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $kind {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $kind {
                type Err = KindParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$kind as NamedKind>::from_name(s).ok_or_else(|| KindParseError {
                        label: <$kind as NamedKind>::LABEL,
                        value: s.to_string(),
                    })
                }
            }
        )*
    };
}

// ── Component ───────────────────────────────────────────────────────────────

/// The type of software a component describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Generic,
    Desktop,
    Console,
    Font,
    Codec,
    InputMethod,
    Addon,
    Firmware,
    /// A `type` value this library does not know about.
    Unknown,
}

const ALL_COMPONENT_KINDS: &[ComponentKind] = &[
    ComponentKind::Generic,
    ComponentKind::Desktop,
    ComponentKind::Console,
    ComponentKind::Font,
    ComponentKind::Codec,
    ComponentKind::InputMethod,
    ComponentKind::Addon,
    ComponentKind::Firmware,
];

impl NamedKind for ComponentKind {
    const LABEL: &'static str = "component kind";

    fn all() -> &'static [Self] {
        ALL_COMPONENT_KINDS
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Desktop => "desktop",
            Self::Console => "console",
            Self::Font => "font",
            Self::Codec => "codec",
            Self::InputMethod => "inputmethod",
            Self::Addon => "addon",
            Self::Firmware => "firmware",
            Self::Unknown => "unknown",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Desktop => &["desktop-app", "desktop-application"],
            Self::Console => &["console-application"],
            _ => &[],
        }
    }
}

impl ComponentKind {
    /// Map a `type` attribute to a kind, falling back to `Unknown`.
    pub fn from_str_loose(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::Unknown)
    }
}

// ── URLs, icons, bundles ────────────────────────────────────────────────────

/// Kinds of web links a component can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    Homepage,
    Bugtracker,
    Faq,
    Help,
    Donation,
    Translate,
}

impl NamedKind for UrlKind {
    const LABEL: &'static str = "url kind";

    fn all() -> &'static [Self] {
        &[
            Self::Homepage,
            Self::Bugtracker,
            Self::Faq,
            Self::Help,
            Self::Donation,
            Self::Translate,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Bugtracker => "bugtracker",
            Self::Faq => "faq",
            Self::Help => "help",
            Self::Donation => "donation",
            Self::Translate => "translate",
        }
    }
}

/// How an icon is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Named icon from the system icon theme.
    Stock,
    /// Icon shipped in the catalog's icon cache.
    Cached,
    /// Absolute path on the local filesystem.
    Local,
    /// Icon downloaded from a URL.
    Remote,
}

impl NamedKind for IconKind {
    const LABEL: &'static str = "icon kind";

    fn all() -> &'static [Self] {
        &[Self::Stock, Self::Cached, Self::Local, Self::Remote]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Cached => "cached",
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

/// Packaging technology a bundle id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    Limba,
    Flatpak,
}

impl NamedKind for BundleKind {
    const LABEL: &'static str = "bundle kind";

    fn all() -> &'static [Self] {
        &[Self::Limba, Self::Flatpak]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Limba => "limba",
            Self::Flatpak => "flatpak",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Flatpak => &["xdg-app"],
            Self::Limba => &[],
        }
    }
}

// ── Releases ────────────────────────────────────────────────────────────────

/// How important it is to install a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyKind {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl NamedKind for UrgencyKind {
    const LABEL: &'static str = "urgency";

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl UrgencyKind {
    /// Map an `urgency` attribute to a kind, falling back to `Unknown`.
    pub fn from_str_loose(s: &str) -> Self {
        Self::from_name(s).unwrap_or(Self::Unknown)
    }
}

/// Hash algorithm of a release artifact checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumKind {
    Sha1,
    Sha256,
}

impl NamedKind for ChecksumKind {
    const LABEL: &'static str = "checksum kind";

    fn all() -> &'static [Self] {
        &[Self::Sha1, Self::Sha256]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

/// Which size of a release artifact is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKind {
    Download,
    Installed,
}

impl NamedKind for SizeKind {
    const LABEL: &'static str = "size kind";

    fn all() -> &'static [Self] {
        &[Self::Download, Self::Installed]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Installed => "installed",
        }
    }
}

// ── Provided items ──────────────────────────────────────────────────────────

/// Capability classes a component can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvidedKind {
    Library,
    Binary,
    Font,
    Modalias,
    FirmwareRuntime,
    FirmwareFlashed,
    /// Python 3 module.
    Python,
    Python2,
    DbusSystem,
    DbusUser,
    Mimetype,
}

impl NamedKind for ProvidedKind {
    const LABEL: &'static str = "provided kind";

    fn all() -> &'static [Self] {
        &[
            Self::Library,
            Self::Binary,
            Self::Font,
            Self::Modalias,
            Self::FirmwareRuntime,
            Self::FirmwareFlashed,
            Self::Python,
            Self::Python2,
            Self::DbusSystem,
            Self::DbusUser,
            Self::Mimetype,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Binary => "binary",
            Self::Font => "font",
            Self::Modalias => "modalias",
            Self::FirmwareRuntime => "firmware-runtime",
            Self::FirmwareFlashed => "firmware-flashed",
            Self::Python => "python3",
            Self::Python2 => "python2",
            Self::DbusSystem => "dbus-system",
            Self::DbusUser => "dbus-user",
            Self::Mimetype => "mimetype",
        }
    }
}

impl ProvidedKind {
    /// Element name inside `<provides>`.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::FirmwareRuntime | Self::FirmwareFlashed => "firmware",
            Self::DbusSystem | Self::DbusUser => "dbus",
            other => other.as_str(),
        }
    }

    /// Value of the `type` attribute, for the kinds that need one.
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            Self::FirmwareRuntime => Some("runtime"),
            Self::FirmwareFlashed => Some("flashed"),
            Self::DbusSystem => Some("system"),
            Self::DbusUser => Some("user"),
            _ => None,
        }
    }

    /// Inverse of [`element_name`](Self::element_name) plus
    /// [`type_attr`](Self::type_attr). `session` is accepted for user buses.
    pub fn from_element(name: &str, type_attr: Option<&str>) -> Option<Self> {
        match (name, type_attr) {
            ("firmware", Some("runtime")) => Some(Self::FirmwareRuntime),
            ("firmware", Some("flashed")) => Some(Self::FirmwareFlashed),
            ("firmware", _) => None,
            ("dbus", Some("system")) => Some(Self::DbusSystem),
            ("dbus", Some("user" | "session")) => Some(Self::DbusUser),
            ("dbus", _) => None,
            (name, _) => Self::from_name(name)
                .filter(|k| k.type_attr().is_none()),
        }
    }
}

// ── Screenshots ─────────────────────────────────────────────────────────────

/// Whether a screenshot is the one to show first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenshotKind {
    #[default]
    Normal,
    Default,
}

impl NamedKind for ScreenshotKind {
    const LABEL: &'static str = "screenshot kind";

    fn all() -> &'static [Self] {
        &[Self::Normal, Self::Default]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Default => "default",
        }
    }
}

/// Role of an image inside a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    #[default]
    Source,
    Thumbnail,
}

impl NamedKind for ImageKind {
    const LABEL: &'static str = "image kind";

    fn all() -> &'static [Self] {
        &[Self::Source, Self::Thumbnail]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Thumbnail => "thumbnail",
        }
    }
}

named_kind_impls!(
    ComponentKind,
    UrlKind,
    IconKind,
    BundleKind,
    UrgencyKind,
    ChecksumKind,
    SizeKind,
    ProvidedKind,
    ScreenshotKind,
    ImageKind,
);

#[cfg(test)]
#[path = "tests/kinds_tests.rs"]
mod tests;

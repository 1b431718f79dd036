//! Component model for AppStream software metadata.
//!
//! These types describe installable software the way catalogs see it:
//! localized names and descriptions, icons, screenshots, releases and the
//! capabilities a package provides. They carry no XML knowledge; the
//! `metainfo-xml` crate maps documents onto them and back.

pub mod component;
pub mod kinds;
pub mod locale;
pub mod release;
pub mod screenshot;

pub use component::{Component, Icon, ProvidedItem};
pub use kinds::{
    BundleKind, ChecksumKind, ComponentKind, IconKind, ImageKind, KindParseError, NamedKind,
    ProvidedKind, ScreenshotKind, SizeKind, UrgencyKind, UrlKind,
};
pub use locale::{ALL_LOCALES, DEFAULT_LOCALE, LocaleTable, locale_short};
pub use release::Release;
pub use screenshot::{Image, Screenshot};

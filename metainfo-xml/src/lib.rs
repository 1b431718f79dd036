//! AppStream XML reading and writing.
//!
//! Two document shapes are supported: single-component upstream metainfo
//! files and multi-component distro catalogs. [`parse_upstream`],
//! [`parse_distro`] and [`parse_document`] turn documents into
//! [`metainfo_core::Component`] values; [`serialize_upstream`] and
//! [`serialize_distro`] go the other way. All parsing is driven by an
//! immutable [`ParserConfig`].

pub mod config;
pub mod description;
pub mod document;
pub mod error;
pub mod locale;
pub mod media;
pub mod parser;
pub mod provides;
pub mod releases;
pub mod screenshots;
pub mod serializer;
pub mod tree;
pub mod util;

pub use config::{ParseContext, ParserConfig, ParserMode};
pub use document::{FormatKind, detect_format, parse_distro, parse_document, parse_file, parse_upstream};
pub use error::MetadataError;
pub use locale::resolve_locale;
pub use media::resolve_media_url;
pub use parser::parse_component_node;
pub use serializer::{component_to_node, serialize_distro, serialize_upstream};

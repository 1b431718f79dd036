//! Document-level entry points.
//!
//! Decides which shape a document has, sets up the per-document context and
//! runs the component parser over each component element.

use std::fmt;
use std::path::Path;

use log::debug;
use metainfo_core::Component;

use crate::config::{ParseContext, ParserConfig, ParserMode};
use crate::error::MetadataError;
use crate::parser::parse_component_node;
use crate::tree::{self, Element};

const EMPTY_DOCUMENT: &str = "The XML document appears to be empty.";
const NOT_APPSTREAM: &str = "XML file does not contain valid AppStream data!";

/// The shape of an AppStream document, judged by its root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// `<component>` or legacy `<application>`.
    Upstream,
    /// `<components>`.
    Distro,
    /// Anything else, including a document without a root.
    Unknown,
}

impl FormatKind {
    fn of_root(root: &Element) -> Self {
        match root.name.as_str() {
            "component" | "application" => Self::Upstream,
            "components" => Self::Distro,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upstream => "upstream",
            Self::Distro => "distro",
            Self::Unknown => "unknown",
        })
    }
}

/// Report the shape of `data` without building any components.
pub fn detect_format(data: &str) -> Result<FormatKind, MetadataError> {
    Ok(tree::parse_document(data)?
        .as_ref()
        .map_or(FormatKind::Unknown, FormatKind::of_root))
}

/// Parse a single-component (upstream) document.
///
/// Empty input yields `Ok(None)`. A catalog document is rejected with
/// [`MetadataError::UnexpectedFormatKind`].
pub fn parse_upstream(
    data: &str,
    config: &ParserConfig,
) -> Result<Option<Component>, MetadataError> {
    if data.is_empty() {
        return Ok(None);
    }
    let root = load_root(data)?;
    upstream_from_root(&root, config).map(Some)
}

/// Parse a catalog (distro) document.
///
/// Empty input yields no components. A bare `<component>` root is accepted
/// as a catalog of one.
pub fn parse_distro(data: &str, config: &ParserConfig) -> Result<Vec<Component>, MetadataError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let root = load_root(data)?;
    distro_from_root(&root, config)
}

/// Parse either shape, dispatching on the root element.
pub fn parse_document(data: &str, config: &ParserConfig) -> Result<Vec<Component>, MetadataError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let root = load_root(data)?;
    match FormatKind::of_root(&root) {
        FormatKind::Distro => distro_from_root(&root, config),
        FormatKind::Upstream => Ok(vec![upstream_from_root(&root, config)?]),
        FormatKind::Unknown => Err(MetadataError::invalid_format(NOT_APPSTREAM)),
    }
}

/// Read a file from disk and parse it with [`parse_document`].
pub fn parse_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Vec<Component>, MetadataError> {
    let path = path.as_ref();
    debug!("Reading metadata from {}", path.display());
    let data = std::fs::read_to_string(path)?;
    parse_document(&data, config)
}

fn load_root(data: &str) -> Result<Element, MetadataError> {
    tree::parse_document(data)?.ok_or_else(|| MetadataError::invalid_format(EMPTY_DOCUMENT))
}

fn upstream_from_root(root: &Element, config: &ParserConfig) -> Result<Component, MetadataError> {
    let ctx = ParseContext::new(config, ParserMode::Upstream);
    match root.name.as_str() {
        "component" => parse_component_node(root, &ctx, true),
        "application" => {
            debug!("Parsing legacy AppStream metadata file.");
            parse_component_node(root, &ctx, true)
        }
        "components" => Err(MetadataError::unexpected_format_kind(
            "Tried to parse a catalog document as a single component.",
        )),
        _ => Err(MetadataError::invalid_format(NOT_APPSTREAM)),
    }
}

fn distro_from_root(root: &Element, config: &ParserConfig) -> Result<Vec<Component>, MetadataError> {
    let ctx = ParseContext::new(config, ParserMode::Distro);
    match root.name.as_str() {
        "components" => {
            let priority = match root.attr("priority") {
                Some(raw) => raw.trim().parse::<i32>().unwrap_or_else(|_| {
                    debug!("Invalid catalog priority '{raw}'");
                    config.default_priority
                }),
                None => config.default_priority,
            };
            let ctx = ctx
                .with_origin(root.attr("origin"))
                .with_media_baseurl(root.attr("media_baseurl"))
                .with_priority(priority);

            root.child_elements()
                .filter(|c| c.name == "component")
                .map(|c| parse_component_node(c, &ctx, false))
                .collect()
        }
        "component" => Ok(vec![parse_component_node(root, &ctx, true)?]),
        _ => Err(MetadataError::invalid_format(NOT_APPSTREAM)),
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;

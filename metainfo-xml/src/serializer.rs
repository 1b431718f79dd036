//! Component model → AppStream XML.

use metainfo_core::{Component, ComponentKind, DEFAULT_LOCALE, LocaleTable, NamedKind};

use crate::config::{ParserConfig, ParserMode};
use crate::description::write_description;
use crate::error::MetadataError;
use crate::provides::{write_mimetypes, write_provides};
use crate::releases::write_releases;
use crate::screenshots::write_screenshots;
use crate::tree::{Element, write_document};

/// Catalog format version written on `<components>`.
pub const CATALOG_VERSION: &str = "0.8";

/// Serialize one component as an upstream metainfo document.
pub fn serialize_upstream(cpt: &Component) -> Result<String, MetadataError> {
    write_document(&component_to_node(cpt, ParserMode::Upstream))
}

/// Serialize components as a catalog document. An empty slice gives `None`.
///
/// The catalog `origin` is the configured one, or else the origin every
/// component shares.
pub fn serialize_distro(
    cpts: &[Component],
    config: &ParserConfig,
) -> Result<Option<String>, MetadataError> {
    if cpts.is_empty() {
        return Ok(None);
    }
    let mut root = Element::new("components").with_attr("version", CATALOG_VERSION);
    if let Some(origin) = config.origin.as_deref().or_else(|| shared_origin(cpts)) {
        root.set_attr("origin", origin);
    }
    for cpt in cpts {
        root.push_element(component_to_node(cpt, ParserMode::Distro));
    }
    write_document(&root).map(Some)
}

fn shared_origin(cpts: &[Component]) -> Option<&str> {
    let (first, rest) = cpts.split_first()?;
    let origin = first.origin.as_deref()?;
    rest.iter()
        .all(|cpt| cpt.origin.as_deref() == Some(origin))
        .then_some(origin)
}

/// Build the `<component>` element for `cpt`.
pub fn component_to_node(cpt: &Component, mode: ParserMode) -> Element {
    let mut node = Element::new("component");
    if !matches!(cpt.kind, ComponentKind::Generic | ComponentKind::Unknown) {
        node.set_attr("type", cpt.kind.as_str());
    }

    node.push_element(Element::with_text("id", cpt.id.as_str()));
    push_localized(&mut node, "name", &cpt.name);
    push_localized(&mut node, "summary", &cpt.summary);
    push_localized(&mut node, "developer_name", &cpt.developer_name);
    write_description(&mut node, &cpt.description, mode);

    push_optional(&mut node, "project_license", cpt.project_license.as_deref());
    push_optional(&mut node, "project_group", cpt.project_group.as_deref());
    push_each(&mut node, "pkgname", &cpt.pkgnames);
    push_each(&mut node, "extends", &cpt.extends);
    push_each(&mut node, "compulsory_for_desktop", &cpt.compulsory_for_desktops);

    if cpt.keywords.iter().any(|(_, words)| !words.is_empty()) {
        let mut block = Element::new("keywords");
        for (locale, words) in cpt.keywords.iter() {
            for word in words {
                let mut el = Element::with_text("keyword", word.as_str());
                if locale != DEFAULT_LOCALE {
                    el.set_attr("xml:lang", locale);
                }
                block.push_element(el);
            }
        }
        node.push_element(block);
    }
    if !cpt.categories.is_empty() {
        let mut block = Element::new("categories");
        push_each(&mut block, "category", &cpt.categories);
        node.push_element(block);
    }

    for (kind, url) in &cpt.urls {
        node.push_element(Element::with_text("url", url.as_str()).with_attr("type", kind.as_str()));
    }
    for icon in &cpt.icons {
        node.push_element(Element::with_text("icon", icon.value()).with_attr("type", icon.kind().as_str()));
    }
    for (kind, id) in &cpt.bundles {
        node.push_element(Element::with_text("bundle", id.as_str()).with_attr("type", kind.as_str()));
    }

    if !cpt.releases.is_empty() {
        node.push_element(write_releases(&cpt.releases, mode));
    }
    if !cpt.screenshots.is_empty() {
        node.push_element(write_screenshots(&cpt.screenshots));
    }

    push_optional(&mut node, "source_pkgname", cpt.source_pkgname.as_deref());
    if let Some(block) = write_mimetypes(cpt) {
        node.push_element(block);
    }
    if let Some(block) = write_provides(cpt) {
        node.push_element(block);
    }
    if !cpt.languages.is_empty() {
        let mut block = Element::new("languages");
        for (locale, percentage) in &cpt.languages {
            block.push_element(
                Element::with_text("lang", locale.as_str())
                    .with_attr("percentage", percentage.to_string()),
            );
        }
        node.push_element(block);
    }

    node
}

fn push_localized(node: &mut Element, name: &str, table: &LocaleTable<String>) {
    for (locale, value) in table.iter() {
        let mut el = Element::with_text(name, value.as_str());
        if locale != DEFAULT_LOCALE {
            el.set_attr("xml:lang", locale);
        }
        node.push_element(el);
    }
}

fn push_optional(node: &mut Element, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        node.push_element(Element::with_text(name, value));
    }
}

fn push_each(node: &mut Element, name: &str, values: &[String]) {
    for value in values {
        node.push_element(Element::with_text(name, value.as_str()));
    }
}

#[cfg(test)]
#[path = "tests/serializer_tests.rs"]
mod tests;

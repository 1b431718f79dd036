//! The component node parser.
//!
//! Walks the direct children of a `<component>` element in document order
//! and fills in a [`Component`] field by field. Unknown tags are skipped so
//! newer vocabulary never breaks older readers.

use std::collections::BTreeMap;

use log::debug;
use metainfo_core::{
    BundleKind, Component, ComponentKind, Icon, IconKind, LocaleTable, NamedKind, UrlKind,
};

use crate::config::{ParseContext, ParserMode};
use crate::description::read_description;
use crate::error::MetadataError;
use crate::locale::element_locale;
use crate::media::resolve_media_url;
use crate::provides::{parse_mimetypes, parse_provides};
use crate::releases::parse_releases;
use crate::screenshots::parse_screenshots;
use crate::tree::Element;

/// Child elements of `<component>` this parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentTag {
    Id,
    Pkgname,
    SourcePkgname,
    Name,
    Summary,
    Description,
    Icon,
    Url,
    Categories,
    Keywords,
    Mimetypes,
    Provides,
    Screenshots,
    ProjectLicense,
    ProjectGroup,
    DeveloperName,
    CompulsoryForDesktop,
    Releases,
    Extends,
    Languages,
    Bundle,
}

impl ComponentTag {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "id" => Self::Id,
            "pkgname" => Self::Pkgname,
            "source_pkgname" => Self::SourcePkgname,
            "name" => Self::Name,
            "summary" => Self::Summary,
            "description" => Self::Description,
            "icon" => Self::Icon,
            "url" => Self::Url,
            "categories" => Self::Categories,
            "keywords" => Self::Keywords,
            "mimetypes" => Self::Mimetypes,
            "provides" => Self::Provides,
            "screenshots" => Self::Screenshots,
            "project_license" => Self::ProjectLicense,
            "project_group" => Self::ProjectGroup,
            "developer_name" => Self::DeveloperName,
            "compulsory_for_desktop" => Self::CompulsoryForDesktop,
            "releases" => Self::Releases,
            "extends" => Self::Extends,
            "languages" => Self::Languages,
            "bundle" => Self::Bundle,
            _ => return None,
        })
    }
}

/// Build a component from a `<component>` (or legacy `<application>`)
/// element.
///
/// Origin and priority come from the context. Unless `allow_invalid` is set,
/// a component that fails [`Component::is_valid`] is an error carrying its
/// debug rendering.
pub fn parse_component_node(
    node: &Element,
    ctx: &ParseContext<'_>,
    allow_invalid: bool,
) -> Result<Component, MetadataError> {
    let mut cpt = Component::default();
    cpt.active_locale = ctx.locale.to_string();

    if let Some(kind) = node.attr("type") {
        cpt.kind = ComponentKind::from_str_loose(kind);
        if cpt.kind == ComponentKind::Unknown {
            debug!("Unknown component kind '{kind}'");
        }
    }

    for child in node.child_elements() {
        let Some(tag) = ComponentTag::from_name(&child.name) else {
            continue;
        };
        match tag {
            ComponentTag::Id => {
                cpt.id = child.trimmed_text().unwrap_or_default();
                if ctx.mode == ParserMode::Upstream && cpt.kind == ComponentKind::Generic {
                    // legacy files put the kind on <id>
                    if let Some(kind) = child.attr("type") {
                        match ComponentKind::from_name(kind) {
                            Some(kind) => cpt.kind = kind,
                            None => debug!("Unknown legacy component kind '{kind}'"),
                        }
                    }
                }
            }
            ComponentTag::Pkgname => push_text(&mut cpt.pkgnames, child),
            ComponentTag::SourcePkgname => cpt.source_pkgname = child.trimmed_text(),
            ComponentTag::Name => set_localized(&mut cpt.name, child, ctx),
            ComponentTag::Summary => set_localized(&mut cpt.summary, child, ctx),
            ComponentTag::DeveloperName => set_localized(&mut cpt.developer_name, child, ctx),
            ComponentTag::Description => read_description(child, ctx, &mut cpt.description)?,
            ComponentTag::Icon => {
                if let Some(icon) = parse_icon(child, ctx) {
                    cpt.icons.push(icon);
                }
            }
            ComponentTag::Url => {
                let kind = child.attr("type").and_then(UrlKind::from_name);
                match (kind, child.trimmed_text()) {
                    (Some(kind), Some(url)) => {
                        cpt.urls.insert(kind, url);
                    }
                    (None, _) => debug!("Ignoring url of unknown type {:?}", child.attr("type")),
                    (Some(_), None) => {}
                }
            }
            ComponentTag::Categories => {
                // a later block replaces the earlier list
                let mut categories = Vec::new();
                for category in child.child_elements().filter(|c| c.name == "category") {
                    push_text(&mut categories, category);
                }
                cpt.categories = categories;
            }
            ComponentTag::Keywords => {
                let mut keywords: LocaleTable<Vec<String>> = LocaleTable::new();
                for keyword in child.child_elements().filter(|c| c.name == "keyword") {
                    if let (Some(locale), Some(text)) =
                        (element_locale(keyword, ctx), keyword.trimmed_text())
                    {
                        keywords.entry(&locale).push(text);
                    }
                }
                // replaces per locale, other locales keep their words
                for (locale, words) in keywords.iter() {
                    cpt.keywords.set(locale, words.clone());
                }
            }
            ComponentTag::Mimetypes => cpt.provided.extend(parse_mimetypes(child)),
            ComponentTag::Provides => cpt.provided.extend(parse_provides(child)),
            ComponentTag::Screenshots => cpt.screenshots.extend(parse_screenshots(child, ctx)),
            ComponentTag::ProjectLicense => cpt.project_license = child.trimmed_text(),
            ComponentTag::ProjectGroup => cpt.project_group = child.trimmed_text(),
            ComponentTag::CompulsoryForDesktop => {
                push_text(&mut cpt.compulsory_for_desktops, child)
            }
            ComponentTag::Releases => cpt.releases.extend(parse_releases(child, ctx)?),
            ComponentTag::Extends => push_text(&mut cpt.extends, child),
            ComponentTag::Languages => parse_languages(child, ctx, &mut cpt.languages),
            ComponentTag::Bundle => {
                let kind = child.attr("type").and_then(BundleKind::from_name);
                match (kind, child.trimmed_text()) {
                    (Some(kind), Some(id)) => {
                        cpt.bundles.insert(kind, id);
                    }
                    (None, _) => debug!("Ignoring bundle of unknown type {:?}", child.attr("type")),
                    (Some(_), None) => {}
                }
            }
        }
    }

    cpt.origin = ctx.origin.map(str::to_string);
    cpt.priority = ctx.priority;

    if allow_invalid || cpt.is_valid() {
        Ok(cpt)
    } else {
        Err(MetadataError::invalid_component(cpt.to_debug_string()))
    }
}

fn push_text(list: &mut Vec<String>, el: &Element) {
    if let Some(text) = el.trimmed_text() {
        list.push(text);
    }
}

fn set_localized(table: &mut LocaleTable<String>, el: &Element, ctx: &ParseContext<'_>) {
    if let (Some(locale), Some(text)) = (element_locale(el, ctx), el.trimmed_text()) {
        table.set(locale, text);
    }
}

fn parse_icon(el: &Element, ctx: &ParseContext<'_>) -> Option<Icon> {
    let Some(kind) = el.attr("type").and_then(IconKind::from_name) else {
        debug!("Ignoring icon of unknown type {:?}", el.attr("type"));
        return None;
    };
    let value = el.trimmed_text()?;
    let value = match kind {
        IconKind::Remote => resolve_media_url(ctx.media_baseurl, &value),
        _ => value,
    };
    Some(Icon::new(kind, value))
}

/// Read `<languages>` into locale → percentage.
///
/// Entries are gated by their own `xml:lang`; the locale is the element
/// text. A missing or unparsable percentage counts as 0.
pub fn parse_languages(el: &Element, ctx: &ParseContext<'_>, out: &mut BTreeMap<String, u32>) {
    for lang in el.child_elements().filter(|c| c.name == "lang") {
        if element_locale(lang, ctx).is_none() {
            continue;
        }
        let Some(locale) = lang.trimmed_text() else {
            continue;
        };
        let percentage = lang
            .attr("percentage")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(0);
        out.insert(locale, percentage);
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;

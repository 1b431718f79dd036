//! Long descriptions: reading both locale encodings and writing them back.
//!
//! Catalogs carry one `<description xml:lang="..">` per locale. Upstream
//! files carry a single `<description>` whose paragraphs and list items are
//! tagged individually. Either way the model stores one markup string per
//! locale, paragraphs joined by a newline.

use std::collections::BTreeMap;

use log::debug;
use metainfo_core::{DEFAULT_LOCALE, LocaleTable};

use crate::config::{ParseContext, ParserMode};
use crate::error::MetadataError;
use crate::locale::{element_lang, element_locale, resolve_locale};
use crate::tree::{Element, Node, parse_fragment};

/// Read a `<description>` element into `table`.
///
/// Entries already present for a locale are replaced.
pub fn read_description(
    el: &Element,
    ctx: &ParseContext<'_>,
    table: &mut LocaleTable<String>,
) -> Result<(), MetadataError> {
    match ctx.mode {
        ParserMode::Distro => read_block(el, ctx, table),
        ParserMode::Upstream => read_fragments(el, ctx, table),
    }
}

/// The whole block belongs to the description's own locale.
fn read_block(
    el: &Element,
    ctx: &ParseContext<'_>,
    table: &mut LocaleTable<String>,
) -> Result<(), MetadataError> {
    let Some(locale) = element_locale(el, ctx) else {
        return Ok(());
    };

    let mut parts = Vec::new();
    for child in &el.children {
        match child {
            Node::Element(inner) => parts.push(compact_markup(inner)?),
            Node::Text(text) if !text.trim().is_empty() => {
                parts.push(quick_xml::escape::escape(text.trim()).into_owned());
            }
            Node::Text(_) => {}
        }
    }
    table.set(locale, parts.join("\n"));
    Ok(())
}

/// Every paragraph or list names its own locale.
fn read_fragments(
    el: &Element,
    ctx: &ParseContext<'_>,
    table: &mut LocaleTable<String>,
) -> Result<(), MetadataError> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for child in el.child_elements() {
        if is_list(child) && child.child_elements().any(|li| element_lang(li).is_some()) {
            for (locale, list) in split_list(child, ctx)? {
                grouped.entry(locale).or_default().push(list);
            }
            continue;
        }

        let Some(locale) = element_locale(child, ctx) else {
            continue;
        };
        let mut bare = Element::new(child.name.as_str());
        bare.children = child.children.clone();
        grouped.entry(locale).or_default().push(compact_markup(&bare)?);
    }

    for (locale, parts) in grouped {
        table.set(locale, parts.join("\n"));
    }
    Ok(())
}

/// Split a list whose items carry their own locale into one list per locale.
///
/// Items without a tag inherit the list's tag.
fn split_list(
    list: &Element,
    ctx: &ParseContext<'_>,
) -> Result<Vec<(String, String)>, MetadataError> {
    let list_lang = element_lang(list);
    let mut items: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for item in list.child_elements() {
        let lang = element_lang(item).or(list_lang);
        let Some(locale) = resolve_locale(lang, ctx.locale, ctx.locale_short) else {
            continue;
        };
        let mut bare = Element::new(item.name.as_str());
        bare.children = item.children.clone();
        items.entry(locale).or_default().push(compact_markup(&bare)?);
    }

    Ok(items
        .into_iter()
        .map(|(locale, markup)| {
            let list = format!("<{0}>{1}</{0}>", list.name, markup.concat());
            (locale, list)
        })
        .collect())
}

fn is_list(el: &Element) -> bool {
    el.name == "ul" || el.name == "ol"
}

fn compact_markup(el: &Element) -> Result<String, MetadataError> {
    let mut el = el.clone();
    el.strip_layout();
    el.to_markup()
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Append the description elements for `table` to `parent`.
///
/// Distro output gets one `<description>` per locale; upstream output gets a
/// single `<description>` whose blocks carry `xml:lang`. Markup that does
/// not parse is skipped.
pub fn write_description(parent: &mut Element, table: &LocaleTable<String>, mode: ParserMode) {
    match mode {
        ParserMode::Distro => {
            for (locale, markup) in table.iter() {
                let Some(blocks) = markup_blocks(markup) else {
                    continue;
                };
                let mut desc = Element::new("description");
                if locale != DEFAULT_LOCALE {
                    desc.set_attr("xml:lang", locale);
                }
                for block in blocks {
                    desc.push_element(block);
                }
                parent.push_element(desc);
            }
        }
        ParserMode::Upstream => {
            let mut desc = Element::new("description");
            for (locale, markup) in table.iter() {
                let Some(blocks) = markup_blocks(markup) else {
                    continue;
                };
                for mut block in blocks {
                    if locale != DEFAULT_LOCALE {
                        stamp_locale(&mut block, locale);
                    }
                    desc.push_element(block);
                }
            }
            if desc.has_child_elements() {
                parent.push_element(desc);
            }
        }
    }
}

/// Top-level blocks of stored markup. Bare text becomes a paragraph.
fn markup_blocks(markup: &str) -> Option<Vec<Element>> {
    let root = match parse_fragment(markup) {
        Ok(root) => root,
        Err(e) => {
            debug!("Skipping description that is not valid markup: {e}");
            return None;
        }
    };

    let blocks = root
        .children
        .into_iter()
        .filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(text) if !text.trim().is_empty() => {
                Some(Element::with_text("p", text.trim()))
            }
            Node::Text(_) => None,
        })
        .collect();
    Some(blocks)
}

fn stamp_locale(block: &mut Element, locale: &str) {
    if is_list(block) {
        for child in &mut block.children {
            if let Node::Element(item) = child {
                item.set_attr("xml:lang", locale);
            }
        }
    } else {
        block.set_attr("xml:lang", locale);
    }
}

#[cfg(test)]
#[path = "tests/description_tests.rs"]
mod tests;
